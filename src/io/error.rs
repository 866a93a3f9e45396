//! Error types for table loading, dependency management and matrix computation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum FdError {
    /// Functional dependency references a column the table does not have
    AttributeOutOfRange {
        /// Textual form of the rejected dependency (1-based)
        dependency: String,
        /// Offending 0-based attribute index
        attribute: usize,
        /// Number of columns in the table
        columns: usize,
    },

    /// Functional dependency does not hold on the table it was added to
    ConstraintViolated {
        /// Textual form of the rejected dependency (1-based)
        dependency: String,
    },

    /// Computation parameter validation failed
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Source data cannot be turned into a table of positive codes
    InvalidTable {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Textual dependency does not follow the `l1,l2->r` format
    MalformedDependency {
        /// The rejected input
        input: String,
        /// Explanation of the parse failure
        reason: String,
    },

    /// Computation was stopped through its cancel flag
    Cancelled {
        /// Cells finished before the flag was observed
        completed: usize,
        /// Cells scheduled for evaluation
        total: usize,
    },

    /// Delimited input could not be decoded
    MalformedCsv {
        /// Source of the records
        path: PathBuf,
        /// 1-based line where decoding failed
        line: u64,
        /// Description of the failure
        reason: String,
    },

    /// Output location is blocked by an existing file
    OutputExists {
        /// Path of the blocking file
        path: PathBuf,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for FdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttributeOutOfRange {
                dependency,
                attribute,
                columns,
            } => {
                write!(
                    f,
                    "Attribute index out of bounds: attribute {} in fd {dependency}, number of attributes: {columns}",
                    attribute + 1
                )
            }
            Self::ConstraintViolated { dependency } => {
                write!(f, "Functional dependency \"{dependency}\" not fulfilled")
            }
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTable { reason } => write!(f, "Invalid table: {reason}"),
            Self::MalformedDependency { input, reason } => {
                write!(
                    f,
                    "Functional dependency \"{input}\" incorrectly formatted: {reason} (expected e.g. 1,2,3->4)"
                )
            }
            Self::Cancelled { completed, total } => {
                write!(f, "Computation cancelled after {completed} of {total} cells")
            }
            Self::MalformedCsv { path, line, reason } => {
                write!(f, "Error reading '{}' at line {line}: {reason}", path.display())
            }
            Self::OutputExists { path } => {
                write!(
                    f,
                    "Cannot create directory '{}': file exists",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for FdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, FdError>;

impl From<std::io::Error> for FdError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FdError {
    FdError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid table error
pub fn invalid_table(reason: &impl ToString) -> FdError {
    FdError::InvalidTable {
        reason: reason.to_string(),
    }
}

/// Create a malformed dependency error
pub fn malformed_dependency(input: &impl ToString, reason: &impl ToString) -> FdError {
    FdError::MalformedDependency {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to an I/O error
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> FdError {
    let path = path.into();
    move |source| FdError::FileSystem {
        path,
        operation,
        source,
    }
}
