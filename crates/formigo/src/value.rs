//! Value model shared by the rule engine and the value validators

use crate::error::FormigoError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A flat record of field values
pub type Record = serde_json::Map<String, Value>;

/// Primitive kind of a field value, as named in rule specs.
///
/// An absent field is `Undefined`. `null`, arrays and objects all report
/// `Object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Undefined,
    Object,
    Boolean,
    Number,
    String,
}

impl ValueKind {
    /// Kind of a possibly absent field value
    pub fn of(value: Option<&Value>) -> Self {
        value.map_or(Self::Undefined, Self::of_value)
    }

    /// Kind of a present value
    pub fn of_value(value: &Value) -> Self {
        match value {
            Value::Null | Value::Array(_) | Value::Object(_) => Self::Object,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Object => "object",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = FormigoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undefined" => Ok(Self::Undefined),
            "object" => Ok(Self::Object),
            "boolean" => Ok(Self::Boolean),
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            other => Err(FormigoError::UnknownKind(other.to_string())),
        }
    }
}

/// Whether a possibly absent value counts as present for `required` and
/// `email` checks.
///
/// Absent, `null`, `false`, zero and the empty string are falsy. Everything
/// else is truthy, including whitespace-only strings and empty collections.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Strict equality between two values.
///
/// Numbers compare by numeric value so `1` equals `1.0`. Compound values
/// compare structurally.
pub fn strict_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => a == b,
        },
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| strict_equals(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| strict_equals(x, y)))
        }
        _ => left == right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_of_values() {
        assert_eq!(ValueKind::of(None), ValueKind::Undefined);
        assert_eq!(ValueKind::of(Some(&Value::Null)), ValueKind::Object);
        assert_eq!(ValueKind::of(Some(&json!([1, 2]))), ValueKind::Object);
        assert_eq!(ValueKind::of(Some(&json!({"a": 1}))), ValueKind::Object);
        assert_eq!(ValueKind::of(Some(&json!(true))), ValueKind::Boolean);
        assert_eq!(ValueKind::of(Some(&json!(4.5))), ValueKind::Number);
        assert_eq!(ValueKind::of(Some(&json!("30"))), ValueKind::String);
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("number".parse::<ValueKind>().unwrap(), ValueKind::Number);
        assert_eq!("undefined".parse::<ValueKind>().unwrap(), ValueKind::Undefined);

        let err = "integer".parse::<ValueKind>().unwrap_err();
        assert!(matches!(err, FormigoError::UnknownKind(ref name) if name == "integer"));
    }

    #[test]
    fn test_kind_serde_names() {
        let kind: ValueKind = serde_json::from_value(json!("boolean")).unwrap();
        assert_eq!(kind, ValueKind::Boolean);
        assert_eq!(serde_json::to_value(ValueKind::String).unwrap(), json!("string"));
        assert!(serde_json::from_value::<ValueKind>(json!("Number")).is_err());
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&Value::Null)));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(0.0))));
        assert!(!is_truthy(Some(&json!(""))));

        assert!(is_truthy(Some(&json!(" "))));
        assert!(is_truthy(Some(&json!(-1))));
        assert!(is_truthy(Some(&json!(true))));
        assert!(is_truthy(Some(&json!([]))));
        assert!(is_truthy(Some(&json!({}))));
    }

    #[test]
    fn test_strict_equality() {
        assert!(strict_equals(&json!(1), &json!(1.0)));
        assert!(strict_equals(&json!("a"), &json!("a")));
        assert!(strict_equals(&json!([1, {"k": 2}]), &json!([1.0, {"k": 2}])));

        assert!(!strict_equals(&json!(1), &json!("1")));
        assert!(!strict_equals(&json!(0), &json!(false)));
        assert!(!strict_equals(&Value::Null, &json!(0)));
        assert!(!strict_equals(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
    }
}
