//! Record validation against a [`RuleSpec`]

use crate::error::{FormigoError, ValidationErrors, ValidationResult};
use crate::rules::{FieldRule, RuleSpec};
use crate::validators::email::is_email;
use crate::value::{is_truthy, Record, ValueKind};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

pub const PASSED_MESSAGE: &str = "Validation passed.";
pub const FAILED_MESSAGE: &str = "Validation failed.";

const REQUIRED_MESSAGE: &str = "This field is required.";
const EMAIL_MESSAGE: &str = "Invalid email format.";

/// Result of validating a record.
///
/// `Success` owns a copy of the validated record; the caller's record is
/// never aliased.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Success { data: Record },
    Failure { errors: ValidationErrors },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Success { .. } => PASSED_MESSAGE,
            Self::Failure { .. } => FAILED_MESSAGE,
        }
    }

    /// Validated record, on success
    pub fn data(&self) -> Option<&Record> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Collected errors, on failure
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { errors } => Some(errors),
        }
    }

    pub fn into_result(self) -> ValidationResult<Record> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Failure { errors } => Err(errors),
        }
    }

    /// `{ success, message, data | errors }`
    pub fn to_json(&self) -> Value {
        match self {
            Self::Success { data } => serde_json::json!({
                "success": true,
                "message": PASSED_MESSAGE,
                "data": data,
            }),
            Self::Failure { errors } => serde_json::json!({
                "success": false,
                "message": FAILED_MESSAGE,
                "errors": errors,
            }),
        }
    }
}

impl Serialize for ValidationOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationOutcome", 3)?;
        state.serialize_field("success", &self.is_valid())?;
        state.serialize_field("message", self.message())?;
        match self {
            Self::Success { data } => state.serialize_field("data", data)?,
            Self::Failure { errors } => state.serialize_field("errors", errors)?,
        }
        state.end()
    }
}

impl From<ValidationOutcome> for ValidationResult<Record> {
    fn from(outcome: ValidationOutcome) -> Self {
        outcome.into_result()
    }
}

/// Validate `record` against `rules`.
///
/// Every declared field runs its checks in the order required, type, min,
/// email. Checks never short-circuit, so one field can collect several
/// messages. Record fields without a rule are ignored.
pub fn validate(record: &Record, rules: &RuleSpec) -> ValidationOutcome {
    let mut errors = ValidationErrors::new();

    for (field, rule) in rules.iter() {
        let messages = check_field(rule, record.get(field));
        for message in &messages {
            tracing::trace!(field, message = message.as_str(), "check failed");
        }
        errors.add_errors(field, messages);
    }

    tracing::debug!(
        fields = rules.len(),
        failed_fields = errors.len(),
        "validated record"
    );

    if errors.is_empty() {
        ValidationOutcome::Success {
            data: record.clone(),
        }
    } else {
        ValidationOutcome::Failure { errors }
    }
}

/// Validate an arbitrary JSON value, which must be an object.
pub fn validate_value(data: &Value, rules: &RuleSpec) -> Result<ValidationOutcome, FormigoError> {
    match data {
        Value::Object(record) => Ok(validate(record, rules)),
        other => Err(FormigoError::NotARecord(ValueKind::of_value(other))),
    }
}

fn check_field(rule: &FieldRule, value: Option<&Value>) -> Vec<String> {
    let mut messages = Vec::new();

    if rule.required && !is_truthy(value) {
        messages.push(REQUIRED_MESSAGE.to_string());
    }

    if let Some(expected) = rule.kind {
        if ValueKind::of(value) != expected {
            messages.push(format!("Expected type {}.", expected));
        }
    }

    if let (Some(min), Some(Value::String(text))) = (rule.min, value) {
        if text.chars().count() < min {
            messages.push(format!("Minimum length is {}.", min));
        }
    }

    if rule.email && is_truthy(value) {
        // Truthy non-strings can never be a well-formed address
        let valid = value.and_then(Value::as_str).is_some_and(is_email);
        if !valid {
            messages.push(EMAIL_MESSAGE.to_string());
        }
    }

    messages
}
