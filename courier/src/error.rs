//! Error types.

use thiserror::Error;

/// The main error type for courier operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-related error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("API error [{status}]: {message}")]
    Api { status: u16, message: String },

    /// Operation requires authentication but none was provided.
    #[error("Authentication required")]
    AuthRequired,

    /// Invalid argument passed to an API method.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

/// Coarse classification used for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The request did not complete or the backend refused it.
    Transport,
    /// Payload or argument could not be understood.
    Data,
    /// No identity available.
    Auth,
}

impl Error {
    /// Create an API error from a status code.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Error::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an invalid argument error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Which of the error categories this falls into.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Network(_) | Error::Api { .. } => ErrorCategory::Transport,
            Error::AuthRequired => ErrorCategory::Auth,
            Error::InvalidArgument(_) | Error::Json(_) | Error::Url(_) => ErrorCategory::Data,
        }
    }

    /// Check if this error is potentially retryable by repeating the user action.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network(_) => true,
            Error::Api { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::AuthRequired => true,
            Error::Api { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}

/// Result type alias for courier operations.
pub type Result<T> = std::result::Result<T, Error>;
