//! Error types for form definitions and navigation.
//!
//! Field validation failures are not errors: they are reported as values in
//! an [`ErrorMap`](crate::ErrorMap). The variants here cover malformed
//! definitions and programmer errors such as addressing a field or step
//! that does not exist.

use thiserror::Error;

/// Result type for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

/// Main error type for form operations.
#[derive(Error, Debug)]
pub enum FormError {
    /// The form definition is structurally invalid
    #[error("Invalid form definition: {0}")]
    InvalidDefinition(String),

    /// Two fields share the same name
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    /// A field name that the form does not declare
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A step index outside the form
    #[error("Unknown step index: {0}")]
    UnknownStep(usize),

    /// A modal name that no view knows
    #[error("Unknown modal type: {0}")]
    UnknownModal(String),
}

impl FormError {
    /// Creates a new invalid definition error.
    pub fn invalid_definition(message: impl Into<String>) -> Self {
        Self::InvalidDefinition(message.into())
    }

    /// Creates a new unknown field error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField(field.into())
    }
}
