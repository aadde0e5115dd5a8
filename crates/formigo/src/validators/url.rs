//! URL scheme validator

use crate::error::FormigoError;
use crate::traits::ValueValidator;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(ftp|http|https)://[^ "]+$"#).expect("url pattern compiles"));

/// Accepts `ftp`, `http` and `https` URLs whose remainder has no spaces or
/// double quotes. Schemes are case-sensitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlValidator;

impl UrlValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, value: &str) -> bool {
        URL_REGEX.is_match(value)
    }
}

impl ValueValidator for UrlValidator {
    fn validate_value(&self, value: &Value) -> Result<bool, FormigoError> {
        value
            .as_str()
            .map(|text| self.validate(text))
            .ok_or_else(|| FormigoError::unsupported(self.rule_name(), value))
    }

    fn rule_name(&self) -> &'static str {
        "url"
    }
}
