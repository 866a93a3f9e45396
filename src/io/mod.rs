//! Input/output around the computation core
//!
//! This module contains the outer layer including:
//! - Command-line parsing and the run pipeline
//! - Table ingestion and output writing
//! - Progress display, constants and error types

/// Command-line interface and run pipeline
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Console progress display
pub mod progress;
/// CSV and inline table ingestion
pub mod reader;
/// Matrix formatting and file output
pub mod writer;
