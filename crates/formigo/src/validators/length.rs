//! Length-based validators for strings and collections

use crate::error::FormigoError;
use crate::traits::ValueValidator;
use serde_json::Value;

/// Inclusive length range check for strings and arrays.
///
/// String length is counted in Unicode scalar values. A range with
/// `min > max` accepts nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthValidator {
    /// Minimum length (inclusive)
    pub min: usize,
    /// Maximum length (inclusive)
    pub max: usize,
}

impl LengthValidator {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn validate(&self, value: &str) -> bool {
        self.within(value.chars().count())
    }

    /// Check the number of items in a sequence
    pub fn validate_items<T>(&self, items: &[T]) -> bool {
        self.within(items.len())
    }

    fn within(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }
}

impl ValueValidator for LengthValidator {
    fn validate_value(&self, value: &Value) -> Result<bool, FormigoError> {
        match value {
            Value::String(text) => Ok(self.validate(text)),
            Value::Array(items) => Ok(self.validate_items(items)),
            other => Err(FormigoError::unsupported(self.rule_name(), other)),
        }
    }

    fn rule_name(&self) -> &'static str {
        "length"
    }

    fn parameters(&self) -> Option<Value> {
        Some(serde_json::json!({ "min": self.min, "max": self.max }))
    }
}
