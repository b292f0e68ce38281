//! Ordered field-to-validators schema.
//!
//! The schema is an explicit association list built once at startup.
//! Declaration order is preserved and determines the order of evaluation and
//! of entries in the resulting [`ErrorMap`](regform_core::ErrorMap).

use crate::validators::{
    Validator, is_max_length, is_min_length, is_mobile_number, is_number, is_oib_number,
    is_required, matches_pattern,
};
use crate::{Result, ValidationError};
use regex::Regex;
use regform_core::{FieldDefinition, FormDefinition, RuleSpec};
use tracing::debug;

/// Mapping from field name to its ordered validators.
#[derive(Debug, Clone, Default)]
pub struct ValidationSchema {
    entries: Vec<(String, Vec<Validator>)>,
}

impl ValidationSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`ValidationSchema::insert`].
    pub fn field(mut self, name: impl Into<String>, validators: Vec<Validator>) -> Self {
        self.insert(name, validators);
        self
    }

    /// Associates `validators` with `name`.
    ///
    /// Re-inserting an existing name replaces its validators and keeps its
    /// original position.
    pub fn insert(&mut self, name: impl Into<String>, validators: Vec<Validator>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = validators,
            None => self.entries.push((name, validators)),
        }
    }

    /// Validators declared for `name`.
    pub fn get(&self, name: &str) -> Option<&[Validator]> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, validators)| validators.as_slice())
    }

    /// Returns true if `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Schema restricted to a single field.
    ///
    /// The result is empty when `name` is not declared.
    pub fn restrict(&self, name: &str) -> ValidationSchema {
        self.restrict_to(&[name])
    }

    /// Schema restricted to `names`, keeping declaration order.
    pub fn restrict_to(&self, names: &[&str]) -> ValidationSchema {
        ValidationSchema {
            entries: self
                .entries
                .iter()
                .filter(|(key, _)| names.contains(&key.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Declared field names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates over `(field, validators)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Validator])> {
        self.entries
            .iter()
            .map(|(key, validators)| (key.as_str(), validators.as_slice()))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no field is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the schema for every field of a form definition.
    ///
    /// The definition is checked first; pattern rules are compiled here so
    /// that evaluation never fails.
    pub fn from_definition(definition: &FormDefinition) -> Result<Self> {
        definition.check()?;

        let mut schema = ValidationSchema::new();
        for field in definition.fields() {
            schema.insert(field.name.clone(), build_validators(field)?);
        }

        debug!(
            "Built validation schema for form '{}' with {} fields",
            definition.name,
            schema.len()
        );

        Ok(schema)
    }
}

/// Turns the rule specs of one field into validators.
pub fn build_validators(field: &FieldDefinition) -> Result<Vec<Validator>> {
    check_length_bounds(field)?;
    field
        .rules
        .iter()
        .map(|rule| build_validator(&field.name, rule))
        .collect()
}

fn build_validator(field: &str, rule: &RuleSpec) -> Result<Validator> {
    let message = rule.message();
    let validator = match rule {
        RuleSpec::Required { .. } => is_required(message),
        RuleSpec::MinLength { min, .. } => is_min_length(*min, message),
        RuleSpec::MaxLength { max, .. } => is_max_length(*max, message),
        RuleSpec::Number { .. } => is_number(message),
        RuleSpec::MobileNumber { .. } => is_mobile_number(message),
        RuleSpec::Oib { .. } => is_oib_number(message),
        RuleSpec::Pattern { regex, .. } => {
            let compiled = Regex::new(regex)
                .map_err(|e| ValidationError::invalid_regex(field, e.to_string()))?;
            matches_pattern(compiled, message)
        }
    };
    Ok(validator)
}

fn check_length_bounds(field: &FieldDefinition) -> Result<()> {
    let min = field.rules.iter().find_map(|rule| match rule {
        RuleSpec::MinLength { min, .. } => Some(*min),
        _ => None,
    });
    let max = field.rules.iter().find_map(|rule| match rule {
        RuleSpec::MaxLength { max, .. } => Some(*max),
        _ => None,
    });

    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(ValidationError::invalid_bound(
                &field.name,
                format!("min_length {min} exceeds max_length {max}"),
            ));
        }
    }

    Ok(())
}
