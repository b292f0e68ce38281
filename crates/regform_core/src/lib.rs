//! # Registration Form Core
//!
//! Core data structures and types for the registration form engine.
//!
//! This crate provides the building blocks shared by the validator, the
//! step navigator and the HTTP client: the declarative form definition, the
//! records flowing through validation and submission, and the rendering
//! capabilities a view has to offer.
//!
//! ## Key Concepts
//!
//! - **Form**: an ordered sequence of steps, each owning a disjoint set of fields
//! - **Rule**: a declarative check attached to a field, evaluated in order
//! - **ErrorMap**: the sparse result of a validation pass
//! - **ViewPort**: what the navigator needs from a rendering surface
//!
//! ## Example
//!
//! ```rust
//! use regform_core::{FormBuilder, StepBuilder};
//!
//! let form = FormBuilder::new("newsletter")
//!     .step(StepBuilder::new("Contact").text("mobileNumber", "Mobile", |f| {
//!         f.required("Mobile number is required").mobile_number()
//!     }))
//!     .build();
//!
//! form.check().expect("valid form");
//! assert_eq!(form.last_step(), 0);
//! ```

pub mod builder;
pub mod error;
pub mod form;
pub mod record;
pub mod view;

pub use builder::*;
pub use error::*;
pub use form::*;
pub use record::*;
pub use view::*;
