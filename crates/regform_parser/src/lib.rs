//! Parser for form definitions (YAML/TOML formats).
//!
//! This module loads a [`FormDefinition`] from YAML or TOML and checks its
//! structural invariants before handing it out.
//!
//! # Example
//!
//! ```rust
//! use regform_parser::parse_yaml;
//!
//! let yaml = r#"
//! name: newsletter
//! steps:
//!   - title: Contact
//!     fields:
//!       - name: mobileNumber
//!         label: Mobile number
//!         rules:
//!           - type: required
//!             message: Mobile number is required
//!           - type: mobile_number
//! "#;
//!
//! let form = parse_yaml(yaml).expect("Failed to parse form");
//! assert_eq!(form.name, "newsletter");
//! ```

use regform_core::{FormDefinition, FormError};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during form definition parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// The parsed definition is structurally invalid
    #[error(transparent)]
    InvalidForm(#[from] FormError),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported definition file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a form definition from a YAML string.
pub fn parse_yaml(content: &str) -> Result<FormDefinition> {
    let form: FormDefinition = serde_yaml_ng::from_str(content)?;
    form.check()?;
    Ok(form)
}

/// Parse a form definition from a TOML string.
///
/// # Example
///
/// ```rust
/// use regform_parser::parse_toml;
///
/// let toml = r#"
/// name = "login"
///
/// [[steps]]
/// title = "Credentials"
///
/// [[steps.fields]]
/// name = "username"
/// label = "Username"
/// rules = [{ type = "required" }, { type = "max_length", max = 30 }]
/// "#;
///
/// let form = parse_toml(toml).unwrap();
/// assert_eq!(form.steps[0].fields[0].rules.len(), 2);
/// ```
pub fn parse_toml(content: &str) -> Result<FormDefinition> {
    let form: FormDefinition =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    form.check()?;
    Ok(form)
}

/// Detect the definition format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `DefinitionFormat::Yaml`
/// * `.toml` → `DefinitionFormat::Toml`
pub fn detect_format(path: &Path) -> Result<DefinitionFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(DefinitionFormat::Yaml),
        "toml" => Ok(DefinitionFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a form definition from a file with automatic format detection.
///
/// ```no_run
/// use regform_parser::parse_file;
/// use std::path::Path;
///
/// let form = parse_file(Path::new("forms/registration.yml")).unwrap();
/// println!("Loaded form: {}", form.name);
/// ```
pub fn parse_file(path: &Path) -> Result<FormDefinition> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        DefinitionFormat::Yaml => parse_yaml(&content),
        DefinitionFormat::Toml => parse_toml(&content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regform_core::{FieldKind, RuleSpec};
    use std::io::Write;

    #[test]
    fn test_parse_valid_yaml_minimal() {
        let yaml = r#"
name: minimal
steps:
  - title: Only
"#;

        let form = parse_yaml(yaml).expect("Failed to parse valid YAML");

        assert_eq!(form.name, "minimal");
        assert_eq!(form.steps.len(), 1);
        assert!(form.steps[0].fields.is_empty());
    }

    #[test]
    fn test_parse_yaml_with_rules() {
        let yaml = r#"
name: registration
steps:
  - title: Account
    fields:
      - name: username
        label: Username
        rules:
          - type: required
            message: Username is required
          - type: max_length
            max: 30
      - name: password
        label: Password
        kind: password
        rules:
          - type: min_length
            min: 6
  - title: Identity
    fields:
      - name: socialSecurityNumber
        label: OIB
        rules:
          - type: oib
            message: Bad OIB
      - name: code
        label: Code
        rules:
          - type: pattern
            regex: "^[A-Z]{2}$"
"#;

        let form = parse_yaml(yaml).expect("Failed to parse YAML with rules");

        assert_eq!(form.steps.len(), 2);
        let username = &form.steps[0].fields[0];
        assert_eq!(username.kind, FieldKind::Text);
        assert_eq!(
            username.rules,
            vec![
                RuleSpec::Required {
                    message: Some("Username is required".to_string())
                },
                RuleSpec::MaxLength {
                    max: 30,
                    message: None
                },
            ]
        );

        assert_eq!(form.steps[0].fields[1].kind, FieldKind::Password);
        assert_eq!(form.steps[1].fields[0].rules[0].message(), Some("Bad OIB"));
        assert_eq!(
            form.steps[1].fields[1].rules[0],
            RuleSpec::Pattern {
                regex: "^[A-Z]{2}$".to_string(),
                message: None
            }
        );
    }

    #[test]
    fn test_parse_yaml_unknown_rule_type() {
        let yaml = r#"
name: bad
steps:
  - title: A
    fields:
      - name: x
        label: X
        rules:
          - type: email
"#;

        assert!(matches!(parse_yaml(yaml), Err(ParserError::YamlError(_))));
    }

    #[test]
    fn test_parse_yaml_duplicate_field() {
        let yaml = r#"
name: dup
steps:
  - title: A
    fields:
      - name: x
        label: X
  - title: B
    fields:
      - name: x
        label: X
"#;

        assert!(matches!(
            parse_yaml(yaml),
            Err(ParserError::InvalidForm(FormError::DuplicateField(_)))
        ));
    }

    #[test]
    fn test_parse_yaml_without_steps() {
        let yaml = "name: empty\nsteps: []\n";
        assert!(matches!(
            parse_yaml(yaml),
            Err(ParserError::InvalidForm(FormError::InvalidDefinition(_)))
        ));
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
name = "toml_form"

[[steps]]
title = "Contact"

[[steps.fields]]
name = "mobileNumber"
label = "Mobile number"
rules = [
    { type = "required", message = "Mobile number is required" },
    { type = "mobile_number" },
]
"#;

        let form = parse_toml(toml).expect("Failed to parse TOML");
        assert_eq!(form.name, "toml_form");
        assert_eq!(form.steps[0].fields[0].rules[1].kind(), "mobile_number");
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(matches!(
            parse_toml("name = "),
            Err(ParserError::TomlError(_))
        ));
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(Path::new("form.yml")).unwrap(),
            DefinitionFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("form.YAML")).unwrap(),
            DefinitionFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("form.toml")).unwrap(),
            DefinitionFormat::Toml
        );
        assert!(matches!(
            detect_format(Path::new("form.json")),
            Err(ParserError::UnsupportedFormat(ext)) if ext == "json"
        ));
        assert!(matches!(
            detect_format(Path::new("form")),
            Err(ParserError::InvalidExtension)
        ));
    }

    #[test]
    fn test_parse_file_yaml() {
        let mut file = tempfile::Builder::new()
            .suffix(".yml")
            .tempfile()
            .unwrap();
        writeln!(file, "name: from_file\nsteps:\n  - title: One").unwrap();

        let form = parse_file(file.path()).expect("Failed to parse file");
        assert_eq!(form.name, "from_file");
    }

    #[test]
    fn test_parse_missing_file() {
        assert!(matches!(
            parse_file(Path::new("does/not/exist.yml")),
            Err(ParserError::IoError(_))
        ));
    }
}
