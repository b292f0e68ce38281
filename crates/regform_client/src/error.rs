//! API error types

use thiserror::Error;

/// Message used when a failure carries no usable text.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during API calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Canonical status text, empty for non-standard codes.
        message: String,
    },

    /// Network error during the call.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to decode the response body.
    #[error("Response parse error: {0}")]
    Decode(String),

    /// Failed to encode the request body.
    #[error("Request encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Header name or value that cannot be sent.
    #[error("Invalid header '{0}'")]
    InvalidHeader(String),

    /// Missing or unusable client configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Creates a new status error.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Returns the HTTP status code if this is a status error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable message suitable for display.
    ///
    /// Status errors yield their status text; failures without any text
    /// yield [`UNEXPECTED_ERROR`].
    pub fn user_message(&self) -> String {
        let message = match self {
            Self::Status { message, .. } => message.clone(),
            Self::Network(err) => err.to_string(),
            Self::Decode(message) => message.clone(),
            _ => String::new(),
        };

        if message.trim().is_empty() {
            UNEXPECTED_ERROR.to_string()
        } else {
            message
        }
    }
}
