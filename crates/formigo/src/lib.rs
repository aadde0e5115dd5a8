//! # formigo
//!
//! Record validation with per-field rules, plus a library of standalone
//! value predicates.
//!
//! ```
//! use formigo::{validate, FieldRule, RuleSpec};
//! use serde_json::json;
//!
//! let rules = RuleSpec::new()
//!     .field("name", FieldRule::new().required().min(2))
//!     .field("email", FieldRule::new().email());
//!
//! let record = json!({ "name": "a", "email": "bademail" });
//! let outcome = validate(record.as_object().unwrap(), &rules);
//!
//! let errors = outcome.errors().unwrap();
//! assert_eq!(errors.get_field_errors("name").unwrap(), ["Minimum length is 2."]);
//! assert_eq!(errors.get_field_errors("email").unwrap(), ["Invalid email format."]);
//! ```
//!
//! Value validators are independent of the rule engine:
//!
//! ```
//! use formigo::{CaseValidator, LengthValidator, PasswordValidator};
//!
//! assert!(CaseValidator::new("uppercase").validate("ABC"));
//! assert!(!LengthValidator::new(2, 5).validate("abcdef"));
//! assert!(PasswordValidator::new().validate("Abcdef1!"));
//! ```

pub mod engine;
pub mod error;
pub mod rules;
pub mod traits;
pub mod validators;
pub mod value;

// Re-exports for easy access
pub use engine::{validate, validate_value, ValidationOutcome};
pub use error::{FormigoError, ValidationErrors, ValidationResult};
pub use rules::{FieldRule, RuleSpec};
pub use traits::{record, ToValidationValue, ValueValidator};
pub use value::{is_truthy, strict_equals, Record, ValueKind};

// Built-in validators
pub use validators::{
    validate_all, CaseStyle, CaseValidator, EmailValidator, EqualityValidator, LengthValidator,
    NotAllowedValidator, PasswordValidator, RegexValidator, TypeValidator, UrlValidator,
    ValidatorConfig,
};
