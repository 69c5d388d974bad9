//! Integration tests for CLI commands

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use regform::config::RegformConfig;
use regform_cli_lib::{load_record, Cli, CommandStatus};
use tempfile::TempDir;

const VALID: &str = r#"{
    "firstName": "Ada",
    "lastName": "Lovelace",
    "email": "ada@example.com",
    "phoneNumber": "0123456789",
    "password": "Abcdefg1!",
    "confirmPassword": "Abcdefg1!",
    "age": "36",
    "gender": "female",
    "category": "technology",
    "interests": ["coding", "reading"],
    "birthDate": "1815-12-10"
}"#;

fn write_record(dir: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

/// Parse and run a command line against the default configuration
fn run(args: &[&str]) -> (CommandStatus, String) {
    let cli = Cli::try_parse_from(std::iter::once("regform").chain(args.iter().copied())).unwrap();
    let mut out = Vec::new();
    let status = cli.command.execute(&RegformConfig::default(), &mut out).unwrap();
    (status, String::from_utf8(out).unwrap())
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_validate_valid_record() {
    let dir = TempDir::new().unwrap();
    let record = write_record(&dir, "valid.json", VALID);

    let (status, output) = run(&["validate", arg(&record), "--variant", "schema"]);
    assert_eq!(status, CommandStatus::Success);
    assert!(output.contains("Record is valid"));
}

#[test]
fn test_validate_reports_invalid_email_as_json() {
    let dir = TempDir::new().unwrap();
    let json = VALID.replace("ada@example.com", "not-an-email");
    let record = write_record(&dir, "invalid.json", &json);

    let (status, output) = run(&["validate", arg(&record), "--json"]);
    assert_eq!(status, CommandStatus::Invalid);

    let errors: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(errors, serde_json::json!({ "email": "Invalid Email Format" }));
}

#[test]
fn test_validate_with_disabled_engine() {
    let dir = TempDir::new().unwrap();
    let record = write_record(&dir, "empty.json", "{}");

    let (status, _) = run(&["validate", arg(&record), "--engine", "disabled"]);
    assert_eq!(status, CommandStatus::Success);

    let (status, output) = run(&["validate", arg(&record)]);
    assert_eq!(status, CommandStatus::Invalid);
    assert!(output.contains("First Name is required"));
}

#[test]
fn test_render_with_inline_errors() {
    let dir = TempDir::new().unwrap();
    let record = write_record(&dir, "partial.json", r#"{ "firstName": "Ada", "age": "17" }"#);

    let (status, html) = run(&["render", "--variant", "manual", "--record", arg(&record), "--validate"]);
    assert_eq!(status, CommandStatus::Success);
    assert!(html.starts_with("<form"));
    assert!(html.contains(r#"value="Ada""#));
    assert!(html.contains("You must be at least 18 and not older than 100 years old"));
    assert!(!html.contains("First Name is required"));
}

#[test]
fn test_render_schema_variant_has_category() {
    let (_, html) = run(&["render", "--variant", "schema"]);
    assert!(html.contains(r#"name="category""#));
    assert!(html.contains("label-title"));
    assert!(!html.contains("error-title"));
}

#[test]
fn test_submit_appends_json_lines() {
    let dir = TempDir::new().unwrap();
    let record = write_record(&dir, "valid.json", VALID);
    let out = dir.path().join("submissions.jsonl");

    for _ in 0..2 {
        let (status, output) = run(&["submit", arg(&record), "--out", arg(&out)]);
        assert_eq!(status, CommandStatus::Success);
        assert!(output.contains("Submitted"));
    }

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written.lines().count(), 2);

    let first: serde_json::Value = serde_json::from_str(written.lines().next().unwrap()).unwrap();
    assert_eq!(first["record"], serde_json::to_value(load_record(&record).unwrap()).unwrap());
}

#[test]
fn test_submit_invalid_record_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let record = write_record(&dir, "empty.json", "{}");
    let out = dir.path().join("submissions.jsonl");

    let (status, output) = run(&["submit", arg(&record), "--out", arg(&out)]);
    assert_eq!(status, CommandStatus::Invalid);
    assert!(output.contains("failed validation"));
    assert_eq!(fs::read_to_string(&out).unwrap_or_default(), "");
}

#[test]
fn test_compare_engines_agree() {
    let dir = TempDir::new().unwrap();
    let json = VALID.replace("Abcdefg1!\",\n    \"age", "abc\",\n    \"age");
    let record = write_record(&dir, "mixed.json", &json);

    let (status, output) = run(&["compare", arg(&record), "--variant", "schema"]);
    assert_eq!(status, CommandStatus::Success);
    assert!(output.contains("Engines agree"));
}

#[test]
fn test_config_prints_toml() {
    let (status, output) = run(&["config"]);
    assert_eq!(status, CommandStatus::Success);
    assert!(output.contains("[form]"));
    assert!(output.contains(r#"variant = "manual""#));
}

#[test]
fn test_unknown_variant_is_rejected_by_parser() {
    let result = Cli::try_parse_from(["regform", "render", "--variant", "fancy"]);
    assert!(result.is_err());
}

#[test]
fn test_missing_record_file_is_an_error() {
    let cli = Cli::try_parse_from(["regform", "validate", "/nonexistent/record.json"]).unwrap();
    let mut out = Vec::new();
    let err = cli.command.execute(&RegformConfig::default(), &mut out).unwrap_err();
    assert!(err.to_string().contains("Failed to read record"));
}

#[test]
fn test_config_flag_loads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("regform.toml");
    fs::write(&path, "[form]\nvariant = \"schema\"\n").unwrap();

    let cli = Cli::try_parse_from(["regform", "--config", arg(&path), "config"]).unwrap();
    let config = cli.load_config().unwrap();
    assert_eq!(config.form.variant.as_str(), "schema");
}
