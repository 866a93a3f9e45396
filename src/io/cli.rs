//! Command-line interface for computing information content matrices

use crate::algorithm::executor::{Computation, ComputationConfig};
use crate::dependency::functional::FunctionalDependency;
use crate::io::configuration::{DEFAULT_SEED, OUTPUT_DELIMITER, REPORT_DELIMITER};
use crate::io::error::{Result, file_system, invalid_configuration};
use crate::io::progress::ProgressReporter;
use crate::io::reader::{CsvOptions, read_csv_file, read_encoded};
use crate::io::writer::{format_matrix, write_matrix};
use crate::table::Table;
use clap::Parser;
use ndarray::Array2;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "fdentropy")]
#[command(
    author,
    version,
    about = "Compute the information content of every table cell under functional dependencies"
)]
/// Command-line arguments for the information content tool
// Each optimization and output behaviour is an independent switch
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// CSV file holding the table, or the table itself with --encoded
    #[arg(value_name = "TABLE")]
    pub table: String,

    /// Functional dependencies over 1-based columns, e.g. 1,2->3
    #[arg(value_name = "FDS")]
    pub fds: Vec<FunctionalDependency>,

    /// Read TABLE as an inline table, rows separated by ';' and cells by ','
    #[arg(short, long)]
    pub encoded: bool,

    /// Field delimiter of the CSV file
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Skip the first line of the CSV file
    #[arg(long)]
    pub header: bool,

    /// Write the matrix as CSV to this file (numbered if it exists)
    #[arg(short, long, value_name = "OUTPUT")]
    pub name: Option<PathBuf>,

    /// Show a progress bar while computing
    #[arg(short = 'p', long)]
    pub show_process: bool,

    /// Identify cells with information content one before evaluating
    #[arg(short, long)]
    pub identify_ones: bool,

    /// Compute on the subtable of rows and columns a dependency can affect
    #[arg(short, long)]
    pub subtables: bool,

    /// Sample this many masking patterns per cell instead of enumerating all
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    pub randomise: i64,

    /// Random seed for reproducible sampling
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Add dependencies implied by transitivity before computing
    #[arg(short, long)]
    pub closure: bool,
}

impl Cli {
    /// CSV decoding options
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the delimiter is not a single-byte character
    pub fn csv_options(&self) -> Result<CsvOptions> {
        let delimiter = u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                invalid_configuration("delimiter", &self.delimiter, &"must be an ASCII character")
            })?;
        Ok(CsvOptions {
            delimiter,
            header: self.header,
        })
    }

    /// Computation configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the sample count is negative
    pub fn computation_config(&self) -> Result<ComputationConfig> {
        ComputationConfig {
            fast_path: self.identify_ones,
            subtable_reduction: self.subtables,
            seed: self.seed,
            ..ComputationConfig::default()
        }
        .with_sample_count(self.randomise)
    }
}

/// Outcome of one run, ready for reporting
pub struct RunSummary {
    /// File the table was read from, `None` for inline tables
    pub source: Option<PathBuf>,
    /// Text form of the final dependency list
    pub fds: String,
    /// Computed information content
    pub matrix: Array2<f64>,
    /// Time spent computing the matrix
    pub runtime: Duration,
    /// Time spent deriving the closure, when requested
    pub closure_time: Option<Duration>,
    /// Masking patterns evaluated and scheduled, when progress is shown
    pub processed: Option<(u64, u64)>,
    /// File the matrix was written to, when requested
    pub output: Option<PathBuf>,
}

/// Loads the table, prepares the computation and reports its result
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Read the table named by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or encoded
    pub fn load_table(&self) -> Result<Table> {
        if self.cli.encoded {
            read_encoded(&self.cli.table)
        } else {
            read_csv_file(Path::new(&self.cli.table), self.cli.csv_options()?)
        }
    }

    /// Build the computation with all declared dependencies added
    ///
    /// Returns the closure derivation time when `--closure` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a dependency is
    /// out of range or violated
    pub fn prepare(&self, table: Table) -> Result<(Computation, Option<Duration>)> {
        let mut computation = Computation::new(table, self.cli.computation_config()?);
        for fd in &self.cli.fds {
            computation.add_functional_dependency(fd)?;
        }

        let closure_time = self.cli.closure.then(|| {
            let start = Instant::now();
            computation.compute_closure();
            start.elapsed()
        });

        Ok((computation, closure_time))
    }

    /// Run the whole pipeline without writing the report
    ///
    /// # Errors
    ///
    /// Returns an error if loading, validation, computation or writing fails
    pub fn execute(&self) -> Result<RunSummary> {
        let table = self.load_table()?;
        let (computation, closure_time) = self.prepare(table)?;

        let reporter = if self.cli.show_process {
            ProgressReporter::new()
        } else {
            ProgressReporter::hidden()
        };
        let start = Instant::now();
        let result = computation.information_content_matrix_with(&reporter);
        let runtime = start.elapsed();
        let processed = self
            .cli
            .show_process
            .then(|| (reporter.position(), reporter.length().unwrap_or(0)));
        reporter.finish();
        let matrix = result?;

        let output = self
            .cli
            .name
            .as_deref()
            .map(|path| write_matrix(path, &matrix, OUTPUT_DELIMITER))
            .transpose()?;

        Ok(RunSummary {
            source: (!self.cli.encoded).then(|| PathBuf::from(&self.cli.table)),
            fds: computation.fds_string(),
            matrix,
            runtime,
            closure_time,
            processed,
            output,
        })
    }

    /// Run the pipeline and write the report to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if any stage fails or the report cannot be written
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let summary = self.execute()?;
        write_report(out, &summary).map_err(file_system("<report>", "write"))
    }
}

/// Write the human-readable report of a run
///
/// # Errors
///
/// Propagates write failures of `out`
pub fn write_report<W: Write>(out: &mut W, summary: &RunSummary) -> std::io::Result<()> {
    if let Some(closure_time) = summary.closure_time {
        writeln!(
            out,
            "{} ms for computing the transitive closure",
            closure_time.as_millis()
        )?;
    }
    if let Some(source) = &summary.source {
        writeln!(out, "Source: {}", source.display())?;
    }
    writeln!(out, "FDs: {}", summary.fds)?;
    writeln!(out, "{}", format_matrix(&summary.matrix, REPORT_DELIMITER))?;
    if let Some((done, total)) = summary.processed {
        writeln!(out, "Processed: {done} of {total} masking patterns")?;
    }
    if let Some(output) = &summary.output {
        writeln!(out, "Output: {}", output.display())?;
    }
    writeln!(out, "Runtime: {} seconds", summary.runtime.as_secs_f64())
}
