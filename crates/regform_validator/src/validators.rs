//! Message-bearing validators.
//!
//! A [`Validator`] pairs a [`ValidationRule`] with the message reported when
//! the rule fails. The `is_*` constructors accept an optional custom message
//! and fall back to a default one.

use crate::rules::{self, ValidationRule};
use regex::Regex;

/// Default message of [`is_required`].
pub const REQUIRED_MESSAGE: &str = "Required";
/// Default message of [`is_number`].
pub const NUMBER_MESSAGE: &str = "Number Required";
/// Default message of [`is_mobile_number`].
pub const MOBILE_NUMBER_MESSAGE: &str = "Invalid Mobile number";
/// Default message of [`is_oib_number`].
pub const OIB_MESSAGE: &str = "Invalid OIB number";
/// Default message of [`matches_pattern`].
pub const PATTERN_MESSAGE: &str = "Invalid format";

/// A rule together with the message reported when it fails.
#[derive(Debug, Clone)]
pub struct Validator {
    rule: ValidationRule,
    message: String,
}

impl Validator {
    /// Runs the rule, returning the message on failure.
    pub fn check(&self, value: &str) -> Option<&str> {
        if self.rule.test(value) {
            None
        } else {
            Some(self.message.as_str())
        }
    }

    /// The wrapped rule.
    pub fn rule(&self) -> &ValidationRule {
        &self.rule
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Wraps `rule` so that it reports `message` when it fails.
pub fn compose(rule: ValidationRule, message: impl Into<String>) -> Validator {
    Validator {
        rule,
        message: message.into(),
    }
}

/// Fails on an empty value. Default message: [`REQUIRED_MESSAGE`].
pub fn is_required(message: Option<&str>) -> Validator {
    compose(rules::required(), message.unwrap_or(REQUIRED_MESSAGE))
}

/// Fails unless the trimmed value parses as a finite number.
pub fn is_number(message: Option<&str>) -> Validator {
    compose(rules::number(), message.unwrap_or(NUMBER_MESSAGE))
}

/// Fails on values shorter than `min` characters.
pub fn is_min_length(min: usize, message: Option<&str>) -> Validator {
    let message = message
        .map(str::to_string)
        .unwrap_or_else(|| format!("Min Length {min} required"));
    compose(rules::min_length(min), message)
}

/// Fails on values longer than `max` characters.
pub fn is_max_length(max: usize, message: Option<&str>) -> Validator {
    let message = message
        .map(str::to_string)
        .unwrap_or_else(|| format!("Max Length {max} required"));
    compose(rules::max_length(max), message)
}

/// Fails unless the value looks like a mobile phone number.
pub fn is_mobile_number(message: Option<&str>) -> Validator {
    compose(rules::mobile_number(), message.unwrap_or(MOBILE_NUMBER_MESSAGE))
}

/// Fails unless the value is an OIB with a correct control digit.
pub fn is_oib_number(message: Option<&str>) -> Validator {
    compose(rules::oib(), message.unwrap_or(OIB_MESSAGE))
}

/// Fails unless the value matches `regex`.
pub fn matches_pattern(regex: Regex, message: Option<&str>) -> Validator {
    compose(rules::pattern(regex), message.unwrap_or(PATTERN_MESSAGE))
}
