//! Walkthrough of the rule engine and every value validator
//!
//! Run with `RUST_LOG=formigo=trace` to see each failed check.

use formigo::{
    record, validate, CaseValidator, EmailValidator, EqualityValidator, FieldRule,
    LengthValidator, NotAllowedValidator, PasswordValidator, RegexValidator, RuleSpec,
    TypeValidator, UrlValidator, ValidatorConfig, ValueKind,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("formigo demo");
    println!("============\n");

    demo_rule_engine()?;
    demo_value_validators()?;
    demo_configured_validators()?;

    println!("All demos completed.");
    Ok(())
}

fn demo_rule_engine() -> Result<(), Box<dyn std::error::Error>> {
    println!("Rule engine");
    println!("-----------");

    let rules = RuleSpec::new()
        .field("name", FieldRule::new().required().min(2))
        .field("age", FieldRule::new().kind(ValueKind::Number))
        .field("email", FieldRule::new().required().email());

    let good = record([
        ("name", json!("Ada")),
        ("age", json!(36)),
        ("email", json!("ada@example.com")),
    ]);
    let outcome = validate(&good, &rules);
    println!("  {}", serde_json::to_string_pretty(&outcome)?);

    let bad = record([("name", json!("A")), ("age", json!("36"))]);
    let outcome = validate(&bad, &rules);
    println!("  {}", serde_json::to_string_pretty(&outcome)?);

    let from_yaml = RuleSpec::from_yaml_str("nickname:\n  required: true\n  type: string\n")?;
    match from_yaml.validate(&bad).into_result() {
        Ok(_) => println!("  unexpected success"),
        Err(errors) => println!("  {}", errors),
    }
    println!();
    Ok(())
}

fn demo_value_validators() -> Result<(), Box<dyn std::error::Error>> {
    println!("Value validators");
    println!("----------------");

    let checks = [
        ("case(uppercase) 'ABC'", CaseValidator::new("uppercase").validate("ABC")),
        ("email 'user@example.com'", EmailValidator::new().validate("user@example.com")),
        ("equality(42) 42", EqualityValidator::new(42i64).validate(&json!(42))),
        ("length(2, 5) 'abcdef'", LengthValidator::new(2, 5).validate("abcdef")),
        ("not_allowed('<>') '<b>'", NotAllowedValidator::new("<>").validate("<b>")),
        ("password 'Abcdef1!'", PasswordValidator::new().validate("Abcdef1!")),
        ("regex('^[0-9]+$') '2024'", RegexValidator::new("^[0-9]+$")?.validate("2024")),
        ("type(number) \"30\"", TypeValidator::new("number")?.validate(&json!("30"))),
        ("url 'ftp://files.example.com'", UrlValidator::new().validate("ftp://files.example.com")),
    ];

    for (label, passed) in checks {
        println!("  {:<32} {}", label, if passed { "pass" } else { "fail" });
    }
    println!();
    Ok(())
}

fn demo_configured_validators() -> Result<(), Box<dyn std::error::Error>> {
    println!("Configured validators");
    println!("---------------------");

    let configs = ValidatorConfig::list_from_yaml_str(
        "- kind: length\n  min: 3\n  max: 16\n- kind: case\n  case: lowercase\n- kind: not_allowed\n  chars: \" @\"\n",
    )?;
    let validators = configs
        .iter()
        .map(ValidatorConfig::build)
        .collect::<Result<Vec<_>, _>>()?;

    for username in ["ada_l", "Ada", "a b", "al"] {
        let accepted = formigo::validate_all(&validators, &json!(username))?;
        println!("  username {:<8} {}", format!("'{}'", username), if accepted { "accepted" } else { "rejected" });
    }
    println!();
    Ok(())
}
