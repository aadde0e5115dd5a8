//! Equality validator

use crate::error::FormigoError;
use crate::traits::{ToValidationValue, ValueValidator};
use crate::value::strict_equals;
use serde_json::Value;

/// Passes only values strictly equal to the expected one.
///
/// See [`strict_equals`] for how numbers and compound values compare.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualityValidator {
    expected: Value,
}

impl EqualityValidator {
    pub fn new(expected: impl ToValidationValue) -> Self {
        Self {
            expected: expected.to_validation_value(),
        }
    }

    pub fn expected(&self) -> &Value {
        &self.expected
    }

    pub fn validate(&self, value: &Value) -> bool {
        strict_equals(value, &self.expected)
    }
}

impl ValueValidator for EqualityValidator {
    fn validate_value(&self, value: &Value) -> Result<bool, FormigoError> {
        Ok(self.validate(value))
    }

    fn rule_name(&self) -> &'static str {
        "equality"
    }

    fn parameters(&self) -> Option<Value> {
        Some(serde_json::json!({ "expected": self.expected }))
    }
}
