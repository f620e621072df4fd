//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),
    /// No input files matched
    #[error("No files found matching: {0}")]
    NoFilesFound(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Page files with validation warnings
    #[error("Validation failed: {warnings} warning(s) in {files} file(s)")]
    ValidationFailed {
        /// Files with at least one warning
        files: usize,
        /// Total warnings
        warnings: usize,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
