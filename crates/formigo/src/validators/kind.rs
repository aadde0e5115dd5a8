//! Value kind validator

use crate::error::FormigoError;
use crate::traits::ValueValidator;
use crate::value::ValueKind;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeValidator {
    pub expected: ValueKind,
}

impl TypeValidator {
    /// Build from a kind name. Unknown names are rejected.
    pub fn new(expected: &str) -> Result<Self, FormigoError> {
        Ok(Self::with_kind(expected.parse()?))
    }

    pub fn with_kind(expected: ValueKind) -> Self {
        Self { expected }
    }

    pub fn validate(&self, value: &Value) -> bool {
        ValueKind::of_value(value) == self.expected
    }

    /// Check a possibly absent value; absence has kind `undefined`
    pub fn validate_optional(&self, value: Option<&Value>) -> bool {
        ValueKind::of(value) == self.expected
    }
}

impl ValueValidator for TypeValidator {
    fn validate_value(&self, value: &Value) -> Result<bool, FormigoError> {
        Ok(self.validate(value))
    }

    fn rule_name(&self) -> &'static str {
        "type"
    }

    fn parameters(&self) -> Option<Value> {
        Some(serde_json::json!({ "expected": self.expected }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_validator_matches_kind() {
        let validator = TypeValidator::new("number").unwrap();

        assert!(validator.validate(&json!(30)));
        assert!(validator.validate(&json!(-2.5)));
        assert!(!validator.validate(&json!("30")));
    }

    #[test]
    fn test_type_validator_object_kind() {
        let validator = TypeValidator::with_kind(ValueKind::Object);

        assert!(validator.validate(&Value::Null));
        assert!(validator.validate(&json!([])));
        assert!(validator.validate(&json!({})));
        assert!(!validator.validate(&json!(false)));
    }

    #[test]
    fn test_type_validator_absent_values() {
        let undefined = TypeValidator::new("undefined").unwrap();
        let string = TypeValidator::new("string").unwrap();

        assert!(undefined.validate_optional(None));
        assert!(!undefined.validate(&Value::Null));
        assert!(!string.validate_optional(None));
    }

    #[test]
    fn test_type_validator_unknown_kind() {
        let err = TypeValidator::new("int").unwrap_err();
        assert!(matches!(err, FormigoError::UnknownKind(ref name) if name == "int"));
    }
}
