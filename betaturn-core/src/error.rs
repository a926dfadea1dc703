//! Structured error types for the betaturn crates.

use thiserror::Error;

/// Unified error type for all betaturn operations.
#[derive(Debug, Error)]
pub enum BetaTurnError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed structure or annotation data)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Compression or decompression failure
    #[error("compression error: {0}")]
    Compression(String),

    /// The external secondary-structure annotator exited unsuccessfully.
    #[error("annotator failed ({status}): {stderr}")]
    Annotator { status: String, stderr: String },

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the betaturn crates.
pub type Result<T> = std::result::Result<T, BetaTurnError>;
