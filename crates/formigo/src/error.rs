//! Validation error types and handling

use crate::value::ValueKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// Errors raised while building validators or loading rule specs.
///
/// Failed checks are never reported through this type; they end up in
/// [`ValidationErrors`] instead.
#[derive(Debug, Error)]
pub enum FormigoError {
    #[error("unknown value kind `{0}` (expected undefined, object, boolean, number or string)")]
    UnknownKind(String),

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("{validator} validator cannot check a value of kind {kind}")]
    UnsupportedValue {
        validator: &'static str,
        kind: ValueKind,
    },

    #[error("expected a record object, got a value of kind {0}")]
    NotARecord(ValueKind),

    #[error("malformed JSON rule spec: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed YAML rule spec: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read rule spec: {0}")]
    Io(#[from] std::io::Error),
}

impl FormigoError {
    pub(crate) fn unsupported(validator: &'static str, value: &serde_json::Value) -> Self {
        Self::UnsupportedValue {
            validator,
            kind: ValueKind::of_value(value),
        }
    }
}

/// Field-keyed error messages, one entry per failed check.
///
/// Fields keep the order in which they were first reported and messages
/// keep the order in which the checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(transparent)]
pub struct ValidationErrors {
    /// Map of field names to their error messages
    pub errors: IndexMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Create a new empty validation errors collection
    pub fn new() -> Self {
        Self {
            errors: IndexMap::new(),
        }
    }

    /// Append a message to a field's error list
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Append several messages for a field. Nothing is recorded for an empty list.
    pub fn add_errors(&mut self, field: impl Into<String>, messages: Vec<String>) {
        if messages.is_empty() {
            return;
        }
        self.errors.entry(field.into()).or_default().extend(messages);
    }

    /// Check if there are any validation errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Total number of messages across all fields
    pub fn total_errors(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Messages recorded for a field
    pub fn get_field_errors(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    pub fn has_field_errors(&self, field: &str) -> bool {
        self.errors.get(field).is_some_and(|messages| !messages.is_empty())
    }

    /// Field names in report order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Merge another collection into this one, appending per field
    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.errors {
            self.add_errors(field, messages);
        }
    }

    /// Convert to a JSON-serializable format for API responses
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": "validation_failed",
                "message": crate::engine::FAILED_MESSAGE,
                "fields": self.errors
            }
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "No validation errors")
        } else {
            write!(f, "Validation failed for {} field(s):", self.errors.len())?;
            for (field, messages) in &self.errors {
                for message in messages {
                    write!(f, "\n  {}: {}", field, message)?;
                }
            }
            Ok(())
        }
    }
}
