//! CLI entry point for information content computation

use clap::Parser;
use fdentropy::io::cli::{Cli, Runner};

fn main() -> fdentropy::Result<()> {
    let cli = Cli::parse();
    let runner = Runner::new(cli);
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    runner.run(&mut handle)
}
