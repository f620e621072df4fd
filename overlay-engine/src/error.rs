//! Engine error types
//!
//! Alignment itself never fails; errors come only from reading and decoding
//! page input.

use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// I/O error while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes are not valid UTF-8
    #[error("encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Input is not a chunk array or page object
    #[error("invalid page JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
