//! Error types for the note client.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias using the client's error.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while driving the notes backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered outside the 2xx range.
    #[error("Backend returned {status} for {path}")]
    Status { status: StatusCode, path: String },

    /// The backend answered 2xx with a body of the wrong shape.
    #[error("Unexpected response from {path}: {message}")]
    Decode { path: String, message: String },

    /// Rejected locally before contacting the backend.
    #[error("{0}")]
    Validation(String),

    /// A request URL could not be built from the API root.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// True when the failure happened locally, without a backend call.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
