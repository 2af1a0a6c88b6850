//! Core error types

use thiserror::Error;

/// Core error type for Filterline
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Global subscriber could not be installed
    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
