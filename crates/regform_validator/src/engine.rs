//! Schema evaluation.
//!
//! This module provides [`validate`], the pure evaluation of a schema
//! against an input record, and [`Validation`], which owns a schema built at
//! startup and offers single-field and per-step checks on top of it.

use crate::{Result, ValidationSchema};
use regform_core::{ErrorMap, FormDefinition, FormValues};
use tracing::debug;

/// Validates `inputs` against `schema`.
///
/// For every declared field, in declaration order, the validators run in
/// sequence and the first failing message is recorded; later validators of
/// that field are not evaluated. Fields absent from `inputs` are validated
/// as the empty string. The result contains only failing fields.
///
/// # Example
///
/// ```rust
/// use regform_core::FormValues;
/// use regform_validator::{ValidationSchema, is_max_length, is_required, validate};
///
/// let schema = ValidationSchema::new()
///     .field("x", vec![is_required(None), is_max_length(3, None)]);
///
/// let errors = validate(&schema, &FormValues::new().with("x", "abcd"));
/// assert_eq!(errors.get("x"), Some("Max Length 3 required"));
///
/// let errors = validate(&schema, &FormValues::new().with("x", "ab"));
/// assert!(errors.is_empty());
/// ```
pub fn validate(schema: &ValidationSchema, inputs: &FormValues) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for (field, validators) in schema.iter() {
        if validators.is_empty() {
            continue;
        }

        let value = inputs.value_or_empty(field);
        if let Some(message) = validators.iter().find_map(|v| v.check(value)) {
            errors.insert(field, message);
        }
    }

    errors
}

/// Validation engine bound to one schema.
///
/// # Example
///
/// ```rust
/// use regform_core::FormDefinition;
/// use regform_validator::Validation;
///
/// let validation = Validation::from_definition(&FormDefinition::registration()).unwrap();
///
/// assert_eq!(
///     validation.validate_field("username", ""),
///     Some("Username is required".to_string())
/// );
/// assert_eq!(validation.validate_field("username", "ana"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Validation {
    schema: ValidationSchema,
}

impl Validation {
    /// Creates an engine over `schema`.
    pub fn new(schema: ValidationSchema) -> Self {
        Self { schema }
    }

    /// Builds the schema from a form definition.
    pub fn from_definition(definition: &FormDefinition) -> Result<Self> {
        Ok(Self::new(ValidationSchema::from_definition(definition)?))
    }

    /// The underlying schema.
    pub fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    /// Validates a whole record.
    pub fn validate(&self, inputs: &FormValues) -> ErrorMap {
        let errors = validate(&self.schema, inputs);
        debug!(
            "Validated {} fields, {} failing",
            self.schema.len(),
            errors.len()
        );
        errors
    }

    /// Validates one field in isolation.
    ///
    /// Both the schema and the input are restricted to `field`. An
    /// undeclared field has no validators and therefore never fails.
    pub fn validate_field(&self, field: &str, value: &str) -> Option<String> {
        let schema = self.schema.restrict(field);
        let inputs = FormValues::new().with(field, value);
        validate(&schema, &inputs).get(field).map(str::to_string)
    }

    /// Validates `fields` one at a time, collecting every failure.
    pub fn validate_fields<'a>(
        &self,
        fields: impl IntoIterator<Item = &'a str>,
        inputs: &FormValues,
    ) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for field in fields {
            if let Some(message) = self.validate_field(field, inputs.value_or_empty(field)) {
                errors.insert(field, message);
            }
        }
        errors
    }

    /// Validates the fields owned by step `step` of `definition`.
    pub fn validate_step(
        &self,
        definition: &FormDefinition,
        step: usize,
        inputs: &FormValues,
    ) -> Result<ErrorMap> {
        let step = definition.step(step)?;
        Ok(self.validate_fields(step.fields.iter().map(|f| f.name.as_str()), inputs))
    }
}
