//! Error types for choreboard

use thiserror::Error;

/// Main error type for the choreboard library
#[derive(Error, Debug)]
pub enum Error {
    /// A supplied field failed validation (user-correctable)
    #[error("{field}: {message}")]
    Validation {
        /// The offending field name
        field: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// No chore exists with the given id
    #[error("chore not found: {0}")]
    NotFound(i64),

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// The server process failed to spawn or never became ready
    #[error("startup error: {0}")]
    Startup(String),
}

impl Error {
    /// Create a validation error for a named field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Result type alias for choreboard
pub type Result<T> = std::result::Result<T, Error>;
