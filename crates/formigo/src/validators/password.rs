//! Password strength validator

use crate::error::FormigoError;
use crate::traits::ValueValidator;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

pub const MIN_PASSWORD_LENGTH: usize = 8;

static LOWERCASE: Lazy<Regex> = Lazy::new(|| Regex::new("[a-z]").expect("pattern compiles"));
static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Z]").expect("pattern compiles"));
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new("[0-9]").expect("pattern compiles"));
static SYMBOL: Lazy<Regex> = Lazy::new(|| Regex::new("[^A-Za-z0-9]").expect("pattern compiles"));

/// Strong password check.
///
/// Requires a lowercase ASCII letter, an uppercase ASCII letter, an ASCII
/// digit and one other character (underscore counts), at least
/// [`MIN_PASSWORD_LENGTH`] characters long and on a single line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordValidator;

impl PasswordValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, value: &str) -> bool {
        single_line(value)
            && value.chars().count() >= MIN_PASSWORD_LENGTH
            && LOWERCASE.is_match(value)
            && UPPERCASE.is_match(value)
            && DIGIT.is_match(value)
            && SYMBOL.is_match(value)
    }
}

fn single_line(value: &str) -> bool {
    !value.contains(['\n', '\r', '\u{2028}', '\u{2029}'])
}

impl ValueValidator for PasswordValidator {
    fn validate_value(&self, value: &Value) -> Result<bool, FormigoError> {
        value
            .as_str()
            .map(|text| self.validate(text))
            .ok_or_else(|| FormigoError::unsupported(self.rule_name(), value))
    }

    fn rule_name(&self) -> &'static str {
        "password"
    }

    fn parameters(&self) -> Option<Value> {
        Some(serde_json::json!({ "min_length": MIN_PASSWORD_LENGTH }))
    }
}
