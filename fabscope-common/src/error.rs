//! Common error types for Fabscope

use thiserror::Error;

/// Common result type for Fabscope operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Fabscope services
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON fixture parse error (wraps serde_json::Error)
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
