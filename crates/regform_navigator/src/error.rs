//! Error types for navigation.

use regform_core::FormError;
use regform_validator::ValidationError;
use thiserror::Error;

/// Result type for navigator operations.
pub type Result<T> = std::result::Result<T, NavigatorError>;

/// Errors raised by the navigator.
///
/// These are programmer errors; field validation failures and refused
/// transitions are reported through [`StepOutcome`](crate::StepOutcome).
#[derive(Debug, Error)]
pub enum NavigatorError {
    /// The form could not be turned into a validation schema
    #[error(transparent)]
    Schema(#[from] ValidationError),

    /// A field or step the form does not declare
    #[error(transparent)]
    Form(#[from] FormError),
}
