//! Built-in value validators

pub mod case;
pub mod email;
pub mod equality;
pub mod kind;
pub mod length;
pub mod not_allowed;
pub mod password;
pub mod pattern;
pub mod url;

pub use case::{CaseStyle, CaseValidator};
pub use email::EmailValidator;
pub use equality::EqualityValidator;
pub use kind::TypeValidator;
pub use length::LengthValidator;
pub use not_allowed::NotAllowedValidator;
pub use password::PasswordValidator;
pub use pattern::RegexValidator;
pub use url::UrlValidator;

use crate::error::FormigoError;
use crate::traits::ValueValidator;
use crate::value::ValueKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Serializable description of a validator, tagged by `kind`.
///
/// ```json
/// [
///   { "kind": "length", "min": 2, "max": 5 },
///   { "kind": "not_allowed", "chars": "<>" },
///   { "kind": "type", "expected": "string" }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ValidatorConfig {
    Case { case: CaseStyle },
    Email,
    Equality { expected: Value },
    Length { min: usize, max: usize },
    NotAllowed { chars: String },
    Password,
    Regex { pattern: String },
    Type { expected: ValueKind },
    Url,
}

impl ValidatorConfig {
    /// Construct the described validator
    pub fn build(&self) -> Result<Box<dyn ValueValidator>, FormigoError> {
        let validator: Box<dyn ValueValidator> = match self {
            Self::Case { case } => Box::new(CaseValidator::with_style(*case)),
            Self::Email => Box::new(EmailValidator::new()),
            Self::Equality { expected } => Box::new(EqualityValidator::new(expected.clone())),
            Self::Length { min, max } => Box::new(LengthValidator::new(*min, *max)),
            Self::NotAllowed { chars } => Box::new(NotAllowedValidator::new(chars)),
            Self::Password => Box::new(PasswordValidator::new()),
            Self::Regex { pattern } => Box::new(RegexValidator::new(pattern)?),
            Self::Type { expected } => Box::new(TypeValidator::with_kind(*expected)),
            Self::Url => Box::new(UrlValidator::new()),
        };
        Ok(validator)
    }

    /// Parse a list of validator descriptions from JSON
    pub fn list_from_json_str(content: &str) -> Result<Vec<Self>, FormigoError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a list of validator descriptions from YAML
    pub fn list_from_yaml_str(content: &str) -> Result<Vec<Self>, FormigoError> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Run every validator and report whether all of them accept `value`.
///
/// Stops at the first validator that returns an error.
pub fn validate_all(
    validators: &[Box<dyn ValueValidator>],
    value: &Value,
) -> Result<bool, FormigoError> {
    for validator in validators {
        if !validator.validate_value(value)? {
            tracing::trace!(rule = validator.rule_name(), "value rejected");
            return Ok(false);
        }
    }
    Ok(true)
}
