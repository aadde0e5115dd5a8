//! Email format validator

use crate::error::FormigoError;
use crate::traits::ValueValidator;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// `local@domain.tld` shape: no whitespace or extra `@`, at least one dot
/// after the `@`.
pub(crate) fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Validator for email address format
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, value: &str) -> bool {
        is_email(value)
    }
}

impl ValueValidator for EmailValidator {
    fn validate_value(&self, value: &Value) -> Result<bool, FormigoError> {
        value
            .as_str()
            .map(|text| self.validate(text))
            .ok_or_else(|| FormigoError::unsupported(self.rule_name(), value))
    }

    fn rule_name(&self) -> &'static str {
        "email"
    }
}
