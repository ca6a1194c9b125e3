//! Structured error types for the catena workspace.

use thiserror::Error;

/// Unified error type for all catena operations.
#[derive(Debug, Error)]
pub enum CatenaError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed input data)
    #[error("parse error: {0}")]
    Parse(String),

    /// Processing error (alphabet, frame, or grammar violation in a chain)
    #[error("processing error: {0}")]
    Processing(String),
}

/// Convenience alias used throughout the catena workspace.
pub type Result<T> = std::result::Result<T, CatenaError>;
