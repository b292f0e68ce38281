pub mod check;
pub mod fill;
pub mod users;
pub mod validate;

use anyhow::{Context, Result};
use regform_core::FormDefinition;
use regform_parser::parse_file;
use std::path::Path;
use tracing::debug;

/// Loads the form at `path`, or the built-in registration form.
pub fn load_form(path: Option<&str>) -> Result<FormDefinition> {
    match path {
        Some(path) => parse_file(Path::new(path))
            .with_context(|| format!("Failed to parse form definition: {}", path)),
        None => {
            debug!("No form file given, using the built-in registration form");
            Ok(FormDefinition::registration())
        }
    }
}
