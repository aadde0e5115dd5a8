//! Core validation traits

use crate::error::FormigoError;
use crate::value::Record;
use serde_json::Value;

/// Uniform interface over the built-in value validators.
///
/// Each validator also has a typed inherent `validate` method; this trait is
/// the dynamic entry point used when validators are stored side by side.
pub trait ValueValidator: Send + Sync {
    /// Check a single value.
    ///
    /// Returns [`FormigoError::UnsupportedValue`] when the value's kind is one
    /// the validator cannot judge, rather than answering `false`.
    fn validate_value(&self, value: &Value) -> Result<bool, FormigoError>;

    /// Get the validation rule name/type
    fn rule_name(&self) -> &'static str;

    /// Get validation rule parameters/configuration as JSON
    fn parameters(&self) -> Option<Value> {
        None
    }
}

impl<V: ValueValidator + ?Sized> ValueValidator for Box<V> {
    fn validate_value(&self, value: &Value) -> Result<bool, FormigoError> {
        (**self).validate_value(value)
    }

    fn rule_name(&self) -> &'static str {
        (**self).rule_name()
    }

    fn parameters(&self) -> Option<Value> {
        (**self).parameters()
    }
}

/// Trait for types that can be converted to a validation value
pub trait ToValidationValue {
    fn to_validation_value(&self) -> Value;
}

impl ToValidationValue for String {
    fn to_validation_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToValidationValue for &str {
    fn to_validation_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl ToValidationValue for i32 {
    fn to_validation_value(&self) -> Value {
        Value::Number(serde_json::Number::from(*self))
    }
}

impl ToValidationValue for i64 {
    fn to_validation_value(&self) -> Value {
        Value::Number(serde_json::Number::from(*self))
    }
}

impl ToValidationValue for u64 {
    fn to_validation_value(&self) -> Value {
        Value::Number(serde_json::Number::from(*self))
    }
}

impl ToValidationValue for f64 {
    fn to_validation_value(&self) -> Value {
        // Non-finite floats have no JSON form
        serde_json::Number::from_f64(*self).map_or(Value::Null, Value::Number)
    }
}

impl ToValidationValue for bool {
    fn to_validation_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValidationValue for Value {
    fn to_validation_value(&self) -> Value {
        self.clone()
    }
}

impl<T> ToValidationValue for Option<T>
where
    T: ToValidationValue,
{
    fn to_validation_value(&self) -> Value {
        match self {
            Some(value) => value.to_validation_value(),
            None => Value::Null,
        }
    }
}

impl<T> ToValidationValue for Vec<T>
where
    T: ToValidationValue,
{
    fn to_validation_value(&self) -> Value {
        Value::Array(self.iter().map(ToValidationValue::to_validation_value).collect())
    }
}

/// Build a [`Record`] from field/value pairs
pub fn record<K, V, I>(fields: I) -> Record
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: ToValidationValue,
{
    fields
        .into_iter()
        .map(|(field, value)| (field.into(), value.to_validation_value()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_validation_value() {
        assert_eq!("hello".to_validation_value(), Value::String("hello".to_string()));
        assert_eq!(42i32.to_validation_value(), Value::Number(serde_json::Number::from(42)));
        assert_eq!(true.to_validation_value(), Value::Bool(true));
        assert_eq!(f64::NAN.to_validation_value(), Value::Null);

        let opt_str: Option<String> = Some("test".to_string());
        assert_eq!(opt_str.to_validation_value(), Value::String("test".to_string()));

        let opt_none: Option<String> = None;
        assert_eq!(opt_none.to_validation_value(), Value::Null);

        assert_eq!(vec![1i64, 2].to_validation_value(), serde_json::json!([1, 2]));
    }

    #[test]
    fn test_record_builder() {
        let data = record([("name", "Ada"), ("email", "ada@example.com")]);

        assert_eq!(data.len(), 2);
        assert_eq!(data["name"], Value::String("Ada".to_string()));
    }

    struct AlwaysTrue;

    impl ValueValidator for AlwaysTrue {
        fn validate_value(&self, _value: &Value) -> Result<bool, FormigoError> {
            Ok(true)
        }

        fn rule_name(&self) -> &'static str {
            "always"
        }
    }

    #[test]
    fn test_boxed_validator_delegates() {
        let boxed: Box<dyn ValueValidator> = Box::new(AlwaysTrue);

        assert!(boxed.validate_value(&Value::Null).unwrap());
        assert_eq!(boxed.rule_name(), "always");
        assert!(boxed.parameters().is_none());
    }
}
