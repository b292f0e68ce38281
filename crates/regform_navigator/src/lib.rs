//! # Registration Form Navigator
//!
//! Finite-state controller over the ordered steps of a form. Moving forward
//! (or submitting from the last step) is gated on every field of the current
//! step passing validation; moving back is unconditional.
//!
//! - [`StepState`] with [`advance`], [`retreat`] and [`reset`]: the bare step counter
//! - [`Navigator`]: the counter wired to validation, a [`ViewPort`](regform_core::ViewPort)
//!   and a [`RegistrationApi`](regform_client::RegistrationApi)

mod error;
mod navigator;
mod state;

pub use error::*;
pub use navigator::*;
pub use state::{StepState, advance, reset, retreat};
