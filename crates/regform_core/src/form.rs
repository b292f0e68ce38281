//! Form definition types.
//!
//! This module contains the declarative description of a multi-step form:
//! the ordered steps, the fields each step owns, and the validation rules
//! attached to every field.

use crate::{FormBuilder, FormError, Result, StepBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A multi-step form.
///
/// Steps are presented in declaration order. Every field name is unique
/// across the whole form, so each step owns a disjoint subset of fields.
///
/// # Example
///
/// ```rust
/// use regform_core::FormDefinition;
///
/// let form = FormDefinition::registration();
/// assert_eq!(form.steps.len(), 3);
/// assert_eq!(form.last_step(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    /// Name of the form
    pub name: String,

    /// Ordered form sections
    pub steps: Vec<StepDefinition>,
}

/// One section of a form, presented on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDefinition {
    /// Heading shown for the step
    pub title: String,

    /// Fields owned by this step, in display order
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

/// A single named input of the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name, used as the key in submitted data
    pub name: String,

    /// Human-readable label
    pub label: String,

    /// Input kind
    #[serde(default)]
    pub kind: FieldKind,

    /// Validation rules, evaluated in order
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

/// How an input is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Plain text input
    #[default]
    Text,
    /// Masked input
    Password,
}

/// Declarative validation rule attached to a field.
///
/// Every variant accepts an optional custom error message; when it is
/// absent the validator falls back to its default message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleSpec {
    /// Value must not be empty
    Required {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Value must have at least `min` characters
    MinLength {
        min: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Value must have at most `max` characters
    MaxLength {
        max: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Value must be numeric
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Value must look like a mobile phone number
    MobileNumber {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Value must be a valid OIB (personal identification number)
    Oib {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Value must match a regular expression
    Pattern {
        regex: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl RuleSpec {
    /// Short name of the rule kind, as used in definition files.
    pub fn kind(&self) -> &'static str {
        match self {
            RuleSpec::Required { .. } => "required",
            RuleSpec::MinLength { .. } => "min_length",
            RuleSpec::MaxLength { .. } => "max_length",
            RuleSpec::Number { .. } => "number",
            RuleSpec::MobileNumber { .. } => "mobile_number",
            RuleSpec::Oib { .. } => "oib",
            RuleSpec::Pattern { .. } => "pattern",
        }
    }

    /// The custom message, if one was configured.
    pub fn message(&self) -> Option<&str> {
        match self {
            RuleSpec::Required { message }
            | RuleSpec::MinLength { message, .. }
            | RuleSpec::MaxLength { message, .. }
            | RuleSpec::Number { message }
            | RuleSpec::MobileNumber { message }
            | RuleSpec::Oib { message }
            | RuleSpec::Pattern { message, .. } => message.as_deref(),
        }
    }
}

impl FormDefinition {
    /// Index of the last step.
    ///
    /// A checked definition always has at least one step.
    pub fn last_step(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Returns the step at `index`.
    pub fn step(&self, index: usize) -> Result<&StepDefinition> {
        self.steps.get(index).ok_or(FormError::UnknownStep(index))
    }

    /// Iterates over every field of the form in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.steps.iter().flat_map(|step| step.fields.iter())
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields().find(|field| field.name == name)
    }

    /// Returns the index of the step owning `name`.
    pub fn step_of(&self, name: &str) -> Option<usize> {
        self.steps
            .iter()
            .position(|step| step.fields.iter().any(|field| field.name == name))
    }

    /// Checks the structural invariants of the definition.
    ///
    /// A form needs at least one step, and field names must be unique
    /// across all steps.
    pub fn check(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(FormError::invalid_definition(format!(
                "form '{}' has no steps",
                self.name
            )));
        }

        let mut seen = HashSet::new();
        for field in self.fields() {
            if field.name.is_empty() {
                return Err(FormError::invalid_definition("field name cannot be empty"));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(FormError::DuplicateField(field.name.clone()));
            }
        }

        Ok(())
    }

    /// The built-in three step user registration form.
    pub fn registration() -> Self {
        FormBuilder::new("registration")
            .step(
                StepBuilder::new("Account")
                    .text("username", "Username", |f| {
                        f.required("Username is required").max_length(30)
                    })
                    .password("password", "Password", |f| {
                        f.required("Password is required").min_length(6)
                    }),
            )
            .step(
                StepBuilder::new("Personal")
                    .text("firstName", "First name", |f| {
                        f.required("First name is required").max_length(30)
                    })
                    .text("lastName", "Last name", |f| {
                        f.required("Last name is required").max_length(30)
                    })
                    .text("address", "Address", |f| {
                        f.required("Address is required").max_length(50)
                    }),
            )
            .step(
                StepBuilder::new("Identity")
                    .text("mobileNumber", "Mobile number", |f| {
                        f.required("Mobile number is required").mobile_number()
                    })
                    .text("socialSecurityNumber", "Social security number", |f| {
                        f.required("Social security number is required").oib()
                    }),
            )
            .build()
    }
}
