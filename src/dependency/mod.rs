//! Functional dependency model and the reasoning that runs on it
//!
//! This module contains dependency-related functionality including:
//! - Attribute sets forming each side of a dependency
//! - The dependency entity and its text format
//! - Violation checks against real and masked tables
//! - Transitive closure derivation

/// Sorted attribute index sets
pub mod attributes;
/// Transitive closure derivation to fixpoint
pub mod closure;
/// Functional dependency entity and parsing
pub mod functional;
/// Constraint violation checks
pub mod violation;

pub use attributes::AttributeSet;
pub use functional::FunctionalDependency;
