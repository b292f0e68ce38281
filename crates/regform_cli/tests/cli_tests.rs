use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Helper to create a Command for the regform binary
#[allow(deprecated)]
fn regform() -> Command {
    let mut cmd = Command::cargo_bin("regform").expect("Failed to find regform binary");
    cmd.env_remove("REGFORM_SERVER_URL");
    cmd
}

// ============================================================================
// check command tests
// ============================================================================

#[test]
fn test_check_builtin_form() {
    regform()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("registration"))
        .stdout(predicate::str::contains("Step 1: Account"))
        .stdout(predicate::str::contains("Step 3: Identity"))
        .stdout(predicate::str::contains("password (password)"))
        .stdout(predicate::str::contains("required, oib"));
}

#[test]
fn test_check_yaml_form() {
    regform()
        .arg("check")
        .arg("--form")
        .arg(fixture_path("newsletter.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("newsletter"))
        .stdout(predicate::str::contains("Form definition is valid"))
        .stdout(predicate::str::contains("required, pattern"));
}

#[test]
fn test_check_toml_form() {
    regform()
        .arg("check")
        .arg("--form")
        .arg(fixture_path("survey.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("survey"))
        .stdout(predicate::str::contains("Step 2: Contact"))
        .stdout(predicate::str::contains("mobile_number"));
}

#[test]
fn test_check_invalid_regex() {
    regform()
        .arg("check")
        .arg("--form")
        .arg(fixture_path("invalid_form.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("code"));
}

#[test]
fn test_check_duplicate_field() {
    regform()
        .arg("check")
        .arg("--form")
        .arg(fixture_path("duplicate_field.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("email"));
}

#[test]
fn test_check_missing_file() {
    regform()
        .arg("check")
        .arg("--form")
        .arg("nonexistent.yml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_check_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("form.json");
    fs::write(&path, "{}").unwrap();

    regform()
        .arg("check")
        .arg("--form")
        .arg(&path)
        .assert()
        .failure();
}

// ============================================================================
// validate command tests
// ============================================================================

#[test]
fn test_validate_valid_values() {
    regform()
        .arg("validate")
        .arg("--input")
        .arg(fixture_path("values_valid.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation PASSED"));
}

#[test]
fn test_validate_invalid_values() {
    regform()
        .arg("validate")
        .arg("--input")
        .arg(fixture_path("values_invalid.json"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Validation FAILED"))
        .stdout(predicate::str::contains("Min Length 6 required"))
        .stdout(predicate::str::contains("First name is required"))
        .stdout(predicate::str::contains("Invalid Mobile number"))
        .stdout(predicate::str::contains("Invalid OIB number"))
        .stdout(predicate::str::contains("Invalid fields: 4"));
}

#[test]
fn test_validate_json_output() {
    let output = regform()
        .arg("validate")
        .arg("--input")
        .arg(fixture_path("values_invalid.json"))
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["passed"], false);
    assert_eq!(report["summary"]["error_count"], 4);
    assert_eq!(report["errors"]["password"], "Min Length 6 required");
    assert!(report["errors"].get("username").is_none());
}

#[test]
fn test_validate_single_step() {
    regform()
        .arg("validate")
        .arg("--input")
        .arg(fixture_path("values_step0.json"))
        .arg("--step")
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("Account"))
        .stdout(predicate::str::contains("Validation PASSED"));
}

#[test]
fn test_validate_later_step_reports_missing_fields() {
    regform()
        .arg("validate")
        .arg("--input")
        .arg(fixture_path("values_step0.json"))
        .arg("--step")
        .arg("1")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Address is required"));
}

#[test]
fn test_validate_step_out_of_range() {
    regform()
        .arg("validate")
        .arg("--input")
        .arg(fixture_path("values_step0.json"))
        .arg("--step")
        .arg("7")
        .assert()
        .failure()
        .stderr(predicate::str::contains("step 7"));
}

#[test]
fn test_validate_against_yaml_form() {
    let temp_dir = TempDir::new().unwrap();
    let values = temp_dir.path().join("values.json");
    fs::write(&values, r#"{"email": "ana@example.com", "age": "thirty"}"#).unwrap();

    regform()
        .arg("validate")
        .arg("--form")
        .arg(fixture_path("newsletter.yml"))
        .arg("--input")
        .arg(&values)
        .assert()
        .failure()
        .stdout(predicate::str::contains("age"))
        .stdout(predicate::str::contains("Number Required"))
        .stdout(predicate::str::contains("Invalid fields: 1"));
}

#[test]
fn test_validate_input_not_an_object() {
    let temp_dir = TempDir::new().unwrap();
    let values = temp_dir.path().join("values.json");
    fs::write(&values, "[1, 2, 3]").unwrap();

    regform()
        .arg("validate")
        .arg("--input")
        .arg(&values)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON object"));
}

#[test]
fn test_validate_missing_input() {
    regform()
        .arg("validate")
        .arg("--input")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

// ============================================================================
// fill command tests
// ============================================================================

#[test]
fn test_fill_reports_field_errors() {
    regform()
        .arg("fill")
        .write_stdin("username=\npassword=abc\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1/3: Account"))
        .stdout(predicate::str::contains("Username is required"))
        .stdout(predicate::str::contains("Min Length 6 required"));
}

#[test]
fn test_fill_moves_between_steps() {
    regform()
        .arg("fill")
        .write_stdin("username=ana\npassword=s3cret!\nnext\nprev\nprev\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 2/3: Personal"))
        .stdout(predicate::str::contains("✓ Account"))
        .stdout(predicate::str::contains("Already on the first step"));
}

#[test]
fn test_fill_blocked_step() {
    regform()
        .arg("fill")
        .write_stdin("next\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Password is required"))
        .stderr(predicate::str::contains("2 field(s) need attention"))
        .stdout(predicate::str::contains("Step 2/3").not());
}

#[test]
fn test_fill_masks_password_values() {
    let output = regform()
        .arg("fill")
        .write_stdin("username=ana\npassword=hunter2secret\nvalues\nquit\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("username = ana"));
    assert!(stdout.contains("password = *************"));
    assert!(!stdout.contains("hunter2secret"));
}

#[test]
fn test_fill_show_and_hide_passwords() {
    let output = regform()
        .arg("fill")
        .write_stdin("password=hunter2secret\nshow\nvalues\nhide\nvalues\nquit\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Passwords are shown"));
    assert!(stdout.contains("Passwords are hidden"));
    assert_eq!(stdout.matches("password = hunter2secret").count(), 1);
    assert_eq!(stdout.matches("password = *************").count(), 1);
    assert!(
        stdout.find("password = hunter2secret") < stdout.find("password = *************")
    );
}

#[test]
fn test_fill_unknown_field_and_command() {
    regform()
        .arg("fill")
        .write_stdin("nickname=x\njump\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("nickname"))
        .stderr(predicate::str::contains("Unknown command: jump"));
}

#[test]
fn test_fill_invalid_server_url() {
    regform()
        .arg("fill")
        .arg("--server-url")
        .arg("ftp://example.com")
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid server URL"));
}

// ============================================================================
// users command tests
// ============================================================================

#[test]
fn test_users_unreachable_server() {
    regform()
        .arg("users")
        .arg("--server-url")
        .arg("http://127.0.0.1:1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch users"));
}

// ============================================================================
// General CLI tests
// ============================================================================

#[test]
fn test_cli_help() {
    regform()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("fill"))
        .stdout(predicate::str::contains("users"));
}

#[test]
fn test_cli_version() {
    regform()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("regform"));
}

#[test]
fn test_validate_help() {
    regform()
        .arg("validate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--input"))
        .stdout(predicate::str::contains("--step"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_fill_help_mentions_env() {
    regform()
        .arg("fill")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("REGFORM_SERVER_URL"));
}
