use anyhow::{Context, Result};
use regform_core::FieldKind;
use regform_validator::ValidationSchema;
use tracing::info;

use super::load_form;
use crate::output;

pub fn execute(form_path: Option<&str>) -> Result<()> {
    info!(
        "Checking form definition: {}",
        form_path.unwrap_or("<built-in>")
    );

    let form = load_form(form_path)?;
    let schema = ValidationSchema::from_definition(&form)
        .with_context(|| format!("Failed to build validation schema for '{}'", form.name))?;

    output::print_info(&format!(
        "Form loaded: {} ({} steps, {} fields)",
        form.name,
        form.steps.len(),
        schema.len()
    ));
    output::print_success("Form definition is valid");

    println!("\nForm Summary:");
    println!("  Name:   {}", form.name);
    println!("  Steps:  {}", form.steps.len());
    println!("  Fields: {}", schema.len());

    for (index, step) in form.steps.iter().enumerate() {
        println!("\nStep {}: {}", index + 1, step.title);
        for field in &step.fields {
            let rules: Vec<&str> = field.rules.iter().map(|r| r.kind()).collect();
            let kind = match field.kind {
                FieldKind::Password => " (password)",
                FieldKind::Text => "",
            };
            println!(
                "  - {}{} [{}]: {}",
                field.name,
                kind,
                field.label,
                if rules.is_empty() {
                    "no rules".to_string()
                } else {
                    rules.join(", ")
                }
            );
        }
    }

    Ok(())
}
