//! Information content of relational table cells under functional dependencies
//!
//! Every cell receives a score in [0, 1] telling how free its value is once the
//! declared dependencies must hold: 1 when no dependency can force it, 0 when
//! the rest of the table always determines it. Scores are means over masking
//! patterns of the other cells, enumerated exactly or sampled, with a fast-path
//! classifier and a subtable reduction that leave results unchanged.

#![forbid(unsafe_code)]

/// Masking-pattern evaluation, fast path, reduction and orchestration
pub mod algorithm;
/// Functional dependency model, violation checks and closure
pub mod dependency;
/// Command-line interface, table input, matrix output and error handling
pub mod io;
/// Categorical table storage and result re-embedding
pub mod table;

pub use algorithm::executor::{Computation, ComputationConfig};
pub use dependency::{AttributeSet, FunctionalDependency};
pub use io::error::{FdError, Result};
pub use table::Table;
