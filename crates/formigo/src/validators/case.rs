//! Letter case validator

use crate::error::FormigoError;
use crate::traits::ValueValidator;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Case convention a value must follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum CaseStyle {
    Lowercase,
    Uppercase,
    /// First character is uppercase (or has no case)
    Capitalize,
    /// Unrecognized style; every value passes
    Any,
}

impl CaseStyle {
    /// Parse a style name, falling back to [`CaseStyle::Any`]
    pub fn parse(name: &str) -> Self {
        match name {
            "lowercase" => Self::Lowercase,
            "uppercase" => Self::Uppercase,
            "capitalize" => Self::Capitalize,
            "any" => Self::Any,
            other => {
                tracing::warn!(style = other, "unrecognized case style, accepting any value");
                Self::Any
            }
        }
    }
}

impl From<String> for CaseStyle {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseValidator {
    pub style: CaseStyle,
}

impl CaseValidator {
    pub fn new(style: &str) -> Self {
        Self::with_style(CaseStyle::parse(style))
    }

    pub fn with_style(style: CaseStyle) -> Self {
        Self { style }
    }

    pub fn validate(&self, value: &str) -> bool {
        match self.style {
            CaseStyle::Lowercase => value == value.to_lowercase(),
            CaseStyle::Uppercase => value == value.to_uppercase(),
            CaseStyle::Capitalize => value
                .chars()
                .next()
                .map_or(true, |first| first.to_uppercase().eq([first])),
            CaseStyle::Any => true,
        }
    }
}

impl ValueValidator for CaseValidator {
    fn validate_value(&self, value: &Value) -> Result<bool, FormigoError> {
        value
            .as_str()
            .map(|text| self.validate(text))
            .ok_or_else(|| FormigoError::unsupported(self.rule_name(), value))
    }

    fn rule_name(&self) -> &'static str {
        "case"
    }

    fn parameters(&self) -> Option<Value> {
        Some(serde_json::json!({ "case": self.style }))
    }
}
