//! # Registration Form Validator
//!
//! Field validation engine for registration forms. This crate provides a
//! small declarative rule-composition system:
//!
//! - Rules: pure predicates (required, length bounds, number, mobile number, OIB, pattern)
//! - Validators: rules paired with the message reported on failure
//! - Schemas: ordered field-to-validators associations
//! - Evaluation: a sparse error map, first failing validator per field
//!
//! ## Example
//!
//! ```rust
//! use regform_core::{FormDefinition, FormValues};
//! use regform_validator::Validation;
//!
//! let validation = Validation::from_definition(&FormDefinition::registration()).unwrap();
//!
//! let inputs = FormValues::new()
//!     .with("username", "ana")
//!     .with("socialSecurityNumber", "69435151531");
//!
//! let errors = validation.validate(&inputs);
//! assert_eq!(errors.get("socialSecurityNumber"), Some("Invalid OIB number"));
//! assert!(!errors.contains("username"));
//! ```

mod engine;
mod error;
pub mod oib;
pub mod rules;
mod schema;
mod validators;

pub use engine::*;
pub use error::*;
pub use rules::ValidationRule;
pub use schema::*;
pub use validators::*;
