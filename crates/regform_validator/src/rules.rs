//! Validation rules.
//!
//! A rule is a pure predicate over a raw string value. Rules carry no error
//! message; see [`crate::Validator`] for the message-bearing wrapper.

use crate::oib::is_valid_oib;
use regex::Regex;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Optional leading `+`, then 3, 4 and 5 digits with optional separators.
static MOBILE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?([0-9]{3})\)?[-. ]?([0-9]{4})[-. ]?([0-9]{5})$")
        .expect("mobile number pattern is valid")
});

type Predicate = dyn Fn(&str) -> bool + Send + Sync;

/// A named, stateless pass/fail predicate.
#[derive(Clone)]
pub struct ValidationRule {
    name: String,
    predicate: Arc<Predicate>,
}

impl ValidationRule {
    /// Wraps a predicate under a descriptive name.
    pub fn new(
        name: impl Into<String>,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Returns true if `value` passes.
    pub fn test(&self, value: &str) -> bool {
        (self.predicate)(value)
    }

    /// Descriptive name of the rule.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Passes iff the value is not empty.
pub fn required() -> ValidationRule {
    ValidationRule::new("required", |value| char_len(value) > 0)
}

/// Passes iff the value has at least `min` characters.
pub fn min_length(min: usize) -> ValidationRule {
    ValidationRule::new(format!("min_length({min})"), move |value| {
        char_len(value) >= min
    })
}

/// Passes iff the value has at most `max` characters.
pub fn max_length(max: usize) -> ValidationRule {
    ValidationRule::new(format!("max_length({max})"), move |value| {
        char_len(value) <= max
    })
}

/// Passes iff the trimmed value parses as a finite number.
pub fn number() -> ValidationRule {
    ValidationRule::new("number", is_numeric)
}

/// Passes iff the value is a mobile phone number.
pub fn mobile_number() -> ValidationRule {
    ValidationRule::new("mobile_number", |value| MOBILE_NUMBER.is_match(value))
}

/// Passes iff the value is a valid OIB.
pub fn oib() -> ValidationRule {
    ValidationRule::new("oib", is_valid_oib)
}

/// Passes iff the value matches `regex`.
pub fn pattern(regex: Regex) -> ValidationRule {
    ValidationRule::new(format!("pattern({})", regex.as_str()), move |value| {
        regex.is_match(value)
    })
}

/// Returns true if the trimmed value parses as a finite number.
pub fn is_numeric(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(f64::is_finite)
        .unwrap_or(false)
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_required() {
        let rule = required();
        assert!(!rule.test(""));
        assert!(rule.test(" "));
        assert!(rule.test("a"));
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let min = min_length(3);
        assert!(!min.test("ab"));
        assert!(min.test("abc"));

        let max = max_length(3);
        assert!(max.test("abc"));
        assert!(!max.test("abcd"));
        assert!(max.test(""));
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(max_length(5).test("Đurđa"));
        assert!(!min_length(6).test("Đurđa"));
    }

    #[test]
    fn test_number() {
        let rule = number();
        assert!(rule.test("42"));
        assert!(rule.test(" -3.5 "));
        assert!(rule.test("1e3"));
        assert!(!rule.test(""));
        assert!(!rule.test("abc"));
        assert!(!rule.test("NaN"));
        assert!(!rule.test("inf"));
    }

    #[test]
    fn test_mobile_number() {
        let rule = mobile_number();
        for ok in [
            "+385912345678",
            "385912345678",
            "385-9123-45678",
            "+385 9123 45678",
            "385.9123.45678",
        ] {
            assert!(rule.test(ok), "{ok} should pass");
        }
        for bad in ["", "+38591234567", "38591234567890", "385_9123_45678", "abc912345678"] {
            assert!(!rule.test(bad), "{bad} should fail");
        }
    }

    #[test]
    fn test_oib() {
        assert!(oib().test("69435151530"));
        assert!(!oib().test("69435151531"));
    }

    #[test]
    fn test_pattern() {
        let rule = pattern(Regex::new(r"^[a-z]+$").unwrap());
        assert!(rule.test("ana"));
        assert!(!rule.test("Ana"));
        assert_eq!(rule.name(), "pattern(^[a-z]+$)");
    }

    proptest! {
        #[test]
        fn prop_required_fails_only_on_empty(s in any::<String>()) {
            prop_assert_eq!(required().test(&s), !s.is_empty());
        }

        #[test]
        fn prop_length_bounds_follow_char_count(s in "\\PC{0,40}", n in 0usize..40) {
            let len = s.chars().count();
            prop_assert_eq!(min_length(n).test(&s), len >= n);
            prop_assert_eq!(max_length(n).test(&s), len <= n);
        }

        #[test]
        fn prop_formatted_numbers_pass(x in -1.0e12f64..1.0e12) {
            prop_assert!(number().test(&x.to_string()));
            let padded = format!("  {x} ");
            prop_assert!(number().test(&padded));
        }
    }
}
