//! # Registration API Client
//!
//! Minimal HTTP client for the registration backend:
//!
//! - [`ApiClient`]: GET/POST/DELETE over a JSON REST endpoint
//! - [`RegistrationApi`]: the two calls the form makes (submit a user, list users)
//! - [`ClientConfig`]: base URL and default headers
//!
//! Failures surface as [`ClientError`]; [`ClientError::user_message`] gives
//! the text to show in place of the result.

mod api;
mod client;
mod config;
mod error;

pub use api::*;
pub use client::*;
pub use config::*;
pub use error::*;
