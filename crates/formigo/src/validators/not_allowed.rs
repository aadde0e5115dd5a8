//! Forbidden character validator

use crate::error::FormigoError;
use crate::traits::ValueValidator;
use regex::Regex;
use serde_json::Value;

/// Rejects values containing any character from a forbidden set.
///
/// [`NotAllowedValidator::new`] treats every character literally, so `]`,
/// `\`, `^` and `-` need no escaping. [`NotAllowedValidator::from_raw_class`]
/// keeps character-class syntax for callers that want ranges like `a-z`.
#[derive(Debug, Clone)]
pub struct NotAllowedValidator {
    forbidden: Forbidden,
    source: String,
}

#[derive(Debug, Clone)]
enum Forbidden {
    Chars(Vec<char>),
    Class(Regex),
}

impl NotAllowedValidator {
    pub fn new(chars: &str) -> Self {
        let mut set: Vec<char> = chars.chars().collect();
        set.sort_unstable();
        set.dedup();
        Self {
            forbidden: Forbidden::Chars(set),
            source: chars.to_string(),
        }
    }

    /// Build from the body of a character class, e.g. `a-z0-9`
    pub fn from_raw_class(class: &str) -> Result<Self, FormigoError> {
        let forbidden = if class.is_empty() {
            Forbidden::Chars(Vec::new())
        } else {
            Forbidden::Class(Regex::new(&format!("[{}]", class))?)
        };
        Ok(Self {
            forbidden,
            source: class.to_string(),
        })
    }

    /// Characters (or class body) this validator was built from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn validate(&self, value: &str) -> bool {
        match &self.forbidden {
            Forbidden::Chars(set) => !value.chars().any(|c| set.binary_search(&c).is_ok()),
            Forbidden::Class(class) => !class.is_match(value),
        }
    }
}

impl ValueValidator for NotAllowedValidator {
    fn validate_value(&self, value: &Value) -> Result<bool, FormigoError> {
        value
            .as_str()
            .map(|text| self.validate(text))
            .ok_or_else(|| FormigoError::unsupported(self.rule_name(), value))
    }

    fn rule_name(&self) -> &'static str {
        "not_allowed"
    }

    fn parameters(&self) -> Option<Value> {
        Some(serde_json::json!({ "chars": self.source }))
    }
}
