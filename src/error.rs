//! Error types
//!
//! Parsing itself is total and never fails; only the file-backed reader
//! and writer produce errors, and those are I/O failures.

use thiserror::Error;

/// Errors from file-backed reading and writing
#[derive(Error, Debug)]
pub enum CsvError {
    /// Failed to read input
    #[error("Read error: {0}")]
    ReadError(String),

    /// Failed to write output
    #[error("Write error: {0}")]
    WriteError(String),
}

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, CsvError>;
