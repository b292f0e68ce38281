//! Error types for building validation schemas.
//!
//! Evaluating a schema never fails; these errors only arise while turning a
//! form definition into validators.

use regform_core::FormError;
use thiserror::Error;

/// Result type for schema construction.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors that can occur while building a validation schema.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The form definition itself is malformed
    #[error(transparent)]
    Definition(#[from] FormError),

    /// Invalid regex pattern
    #[error("Invalid regex pattern for field '{field}': {error}")]
    InvalidRegex { field: String, error: String },

    /// A `min_length` bound greater than the `max_length` bound of the same field
    #[error("Invalid length bound for field '{field}': {message}")]
    InvalidBound { field: String, message: String },
}

impl ValidationError {
    /// Creates a new invalid regex error.
    pub fn invalid_regex(field: impl Into<String>, error: impl Into<String>) -> Self {
        Self::InvalidRegex {
            field: field.into(),
            error: error.into(),
        }
    }

    /// Creates a new invalid bound error.
    pub fn invalid_bound(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidBound {
            field: field.into(),
            message: message.into(),
        }
    }
}
