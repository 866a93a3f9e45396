//! Matrix formatting and CSV output with collision-free file naming

use crate::io::error::{FdError, Result, file_system};
use ndarray::Array2;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Format one score; exact ones print as `1`
pub fn format_value(value: f64) -> String {
    if (value - 1.0).abs() < f64::EPSILON {
        "1".to_string()
    } else {
        format!("{value:?}")
    }
}

/// Format a matrix with one line per row and `delimiter` between cells
pub fn format_matrix(matrix: &Array2<f64>, delimiter: &str) -> String {
    matrix
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|&value| format_value(value))
                .collect::<Vec<_>>()
                .join(delimiter)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// First of `path`, `name(2).ext`, `name(3).ext`, … that does not exist yet
///
/// The extension is everything after the first dot of the file name.
pub fn available_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let parent = path.parent().unwrap_or_else(|| Path::new(""));

    (2..=usize::MAX)
        .map(|index| {
            let numbered = match name.split_once('.') {
                Some((stem, extension)) => format!("{stem}({index}).{extension}"),
                None => format!("{name}({index})"),
            };
            parent.join(numbered)
        })
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

/// Write `matrix` as CSV next to any existing outputs, creating directories
///
/// Returns the path actually written.
///
/// # Errors
///
/// Returns `OutputExists` if a parent path component is a file and
/// `FileSystem` if directories or the file cannot be written
pub fn write_matrix(path: &Path, matrix: &Array2<f64>, delimiter: &str) -> Result<PathBuf> {
    if let Some(blocking) = path.ancestors().skip(1).find(|ancestor| ancestor.is_file()) {
        return Err(FdError::OutputExists {
            path: blocking.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(file_system(parent, "create directory"))?;
    }

    let target = available_path(path);
    let file = File::create(&target).map_err(file_system(&target, "create"))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", format_matrix(matrix, delimiter))
        .and_then(|()| writer.flush())
        .map_err(file_system(&target, "write"))?;

    Ok(target)
}
