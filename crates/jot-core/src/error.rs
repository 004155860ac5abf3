//! Error types for jot.

use thiserror::Error;

/// Result type alias using jot's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for jot operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Identifier does not match the 24-hex document id shape
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// Malformed or missing required input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Username already taken by another user
    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    /// Authentication failed
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Internal(e.to_string())
    }
}
