//! Table storage and shape transformations
//!
//! This module contains table-related functionality including:
//! - Categorical code storage with the masked-value convention
//! - Re-embedding of results computed on reduced tables

/// Padding-based re-embedding of reduced matrices
pub mod embedding;
/// Categorical code matrix
pub mod grid;

pub use embedding::Removal;
pub use grid::Table;
