//! Builder pattern for creating form definitions.
//!
//! This module provides ergonomic builders for constructing forms, their
//! steps and fields with a fluent API.

use crate::{FieldDefinition, FieldKind, FormDefinition, RuleSpec, StepDefinition};

/// Builder for creating a `FormDefinition`.
///
/// # Example
///
/// ```rust
/// use regform_core::{FormBuilder, StepBuilder};
///
/// let form = FormBuilder::new("signup")
///     .step(StepBuilder::new("Account").text("username", "Username", |f| {
///         f.required("Username is required").max_length(30)
///     }))
///     .build();
///
/// assert_eq!(form.steps[0].fields[0].rules.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct FormBuilder {
    name: String,
    steps: Vec<StepDefinition>,
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Appends a step.
    pub fn step(mut self, step: StepBuilder) -> Self {
        self.steps.push(step.build());
        self
    }

    /// Builds the form.
    ///
    /// The result is not checked; call [`FormDefinition::check`] before use.
    pub fn build(self) -> FormDefinition {
        FormDefinition {
            name: self.name,
            steps: self.steps,
        }
    }
}

/// Builder for creating a `StepDefinition`.
#[derive(Debug, Default)]
pub struct StepBuilder {
    title: String,
    fields: Vec<FieldDefinition>,
}

impl StepBuilder {
    /// Creates a new step builder.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field.
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a text field configured by `configure`.
    pub fn text(
        self,
        name: impl Into<String>,
        label: impl Into<String>,
        configure: impl FnOnce(FieldBuilder) -> FieldBuilder,
    ) -> Self {
        let field = configure(FieldBuilder::new(name, label)).build();
        self.field(field)
    }

    /// Adds a password field configured by `configure`.
    pub fn password(
        self,
        name: impl Into<String>,
        label: impl Into<String>,
        configure: impl FnOnce(FieldBuilder) -> FieldBuilder,
    ) -> Self {
        let field = configure(FieldBuilder::new(name, label).kind(FieldKind::Password)).build();
        self.field(field)
    }

    /// Builds the step.
    pub fn build(self) -> StepDefinition {
        StepDefinition {
            title: self.title,
            fields: self.fields,
        }
    }
}

/// Builder for creating a `FieldDefinition`.
///
/// Rules are kept in the order they are added.
///
/// # Example
///
/// ```rust
/// use regform_core::{FieldBuilder, RuleSpec};
///
/// let field = FieldBuilder::new("socialSecurityNumber", "OIB")
///     .required("Social security number is required")
///     .oib()
///     .build();
///
/// assert!(matches!(field.rules[1], RuleSpec::Oib { .. }));
/// ```
#[derive(Debug)]
pub struct FieldBuilder {
    name: String,
    label: String,
    kind: FieldKind,
    rules: Vec<RuleSpec>,
}

impl FieldBuilder {
    /// Creates a new field builder.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Text,
            rules: Vec::new(),
        }
    }

    /// Sets the input kind.
    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Adds an arbitrary rule.
    pub fn rule(mut self, rule: RuleSpec) -> Self {
        self.rules.push(rule);
        self
    }

    /// Requires a non-empty value, reporting `message` otherwise.
    pub fn required(self, message: impl Into<String>) -> Self {
        self.rule(RuleSpec::Required {
            message: Some(message.into()),
        })
    }

    /// Requires at least `min` characters.
    pub fn min_length(self, min: usize) -> Self {
        self.rule(RuleSpec::MinLength { min, message: None })
    }

    /// Allows at most `max` characters.
    pub fn max_length(self, max: usize) -> Self {
        self.rule(RuleSpec::MaxLength { max, message: None })
    }

    /// Requires a numeric value.
    pub fn number(self) -> Self {
        self.rule(RuleSpec::Number { message: None })
    }

    /// Requires a mobile phone number.
    pub fn mobile_number(self) -> Self {
        self.rule(RuleSpec::MobileNumber { message: None })
    }

    /// Requires a valid OIB.
    pub fn oib(self) -> Self {
        self.rule(RuleSpec::Oib { message: None })
    }

    /// Requires the value to match `regex`.
    pub fn pattern(self, regex: impl Into<String>) -> Self {
        self.rule(RuleSpec::Pattern {
            regex: regex.into(),
            message: None,
        })
    }

    /// Builds the field.
    pub fn build(self) -> FieldDefinition {
        FieldDefinition {
            name: self.name,
            label: self.label,
            kind: self.kind,
            rules: self.rules,
        }
    }
}
