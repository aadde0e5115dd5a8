//! Loading rule specs from disk

use formigo::{FieldRule, FormigoError, RuleSpec, ValueKind};
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

fn write_spec(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn expected_spec() -> RuleSpec {
    RuleSpec::new()
        .field("name", FieldRule::new().required().min(2))
        .field("age", FieldRule::new().kind(ValueKind::Number))
        .field("email", FieldRule::new().email())
}

#[test]
fn loads_yaml_by_extension() {
    let file = write_spec(
        ".yaml",
        "name:\n  required: true\n  min: 2\nage:\n  type: number\nemail:\n  email: true\n",
    );

    assert_eq!(RuleSpec::load(file.path()).unwrap(), expected_spec());
}

#[test]
fn loads_yml_by_extension() {
    let file = write_spec(".yml", "name: { required: true, min: 2 }\nage: { type: number }\nemail: { email: true }\n");

    assert_eq!(RuleSpec::load(file.path()).unwrap(), expected_spec());
}

#[test]
fn loads_json_otherwise() {
    let file = write_spec(
        ".rules",
        r#"{ "name": { "required": true, "min": 2 }, "age": { "type": "number" }, "email": { "email": true } }"#,
    );

    assert_eq!(RuleSpec::load(file.path()).unwrap(), expected_spec());
}

#[test]
fn reports_malformed_yaml() {
    let file = write_spec(".yaml", "name:\n  minimum: 2\n");

    assert!(matches!(RuleSpec::load(file.path()), Err(FormigoError::Yaml(_))));
}

#[test]
fn reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let err = RuleSpec::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, FormigoError::Io(_)));
}
