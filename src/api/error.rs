//! API error types with HTTP status code mapping

use serde::Serialize;

/// Error codes that map to HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,
    /// Invalid request (400)
    BadRequest,
    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::Internal => 500,
        }
    }
}

/// API error with code and message
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error code (determines HTTP status)
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Create a not found error
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    /// Create a bad request error
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::BadRequest,
            message: message.into(),
        }
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Internal,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }

    /// Serialize to the wire error body: `{"error": "<message>"}`
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.message.clone(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status_code(), self.message)
    }
}

impl std::error::Error for ApiError {}

/// Store errors map directly onto the HTTP error taxonomy: validation
/// failures are the client's to fix, missing ids are 404s, and anything
/// else is an internal error.
impl From<crate::Error> for ApiError {
    fn from(err: crate::Error) -> Self {
        match err {
            crate::Error::Validation { field, message } => {
                Self::bad_request(format!("{field}: {message}"))
            }
            crate::Error::NotFound(id) => Self::not_found(format!("Chore {id} not found")),
            other => Self::internal(other.to_string()),
        }
    }
}

/// JSON error body: `{"error": "<message>"}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable message
    pub error: String,
}
