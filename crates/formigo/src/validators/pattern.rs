//! Pattern-based validators using regular expressions

use crate::error::FormigoError;
use crate::traits::ValueValidator;
use regex::Regex;
use serde_json::Value;

/// Validator for caller-supplied regular expressions.
///
/// Matching is a search: the pattern may match anywhere in the value unless
/// it is anchored with `^`/`$` itself.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
}

impl RegexValidator {
    /// Compile a new pattern validator
    pub fn new(pattern: &str) -> Result<Self, FormigoError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Create a validator from an existing Regex
    pub fn from_regex(regex: Regex) -> Self {
        Self { pattern: regex }
    }

    /// Get the pattern string
    pub fn pattern_string(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn validate(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }
}

impl From<Regex> for RegexValidator {
    fn from(regex: Regex) -> Self {
        Self::from_regex(regex)
    }
}

impl ValueValidator for RegexValidator {
    fn validate_value(&self, value: &Value) -> Result<bool, FormigoError> {
        value
            .as_str()
            .map(|text| self.validate(text))
            .ok_or_else(|| FormigoError::unsupported(self.rule_name(), value))
    }

    fn rule_name(&self) -> &'static str {
        "regex"
    }

    fn parameters(&self) -> Option<Value> {
        Some(serde_json::json!({ "pattern": self.pattern.as_str() }))
    }
}
