use anyhow::{Context, Result};
use regform_core::FormValues;
use regform_validator::Validation;
use std::fs;
use tracing::info;

use super::load_form;
use crate::output;

pub fn execute(
    input_path: &str,
    form_path: Option<&str>,
    step: Option<usize>,
    format: &str,
) -> Result<()> {
    info!("Validating values: {}", input_path);

    let form = load_form(form_path)?;
    let validation = Validation::from_definition(&form)
        .with_context(|| format!("Failed to build validation schema for '{}'", form.name))?;

    let content = fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read input file: {}", input_path))?;
    let values: FormValues = serde_json::from_str(&content)
        .with_context(|| format!("Input must be a JSON object of strings: {}", input_path))?;

    let (scope, errors) = match step {
        Some(step) => {
            let errors = validation
                .validate_step(&form, step, &values)
                .with_context(|| format!("Cannot validate step {}", step))?;
            (format!("step {} ({})", step, form.steps[step].title), errors)
        }
        None => ("all steps".to_string(), validation.validate(&values)),
    };

    if format != "json" {
        output::print_info(&format!("Form: {}, scope: {}", form.name, scope));
    }
    output::print_validation_report(&errors, format);

    if !errors.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
