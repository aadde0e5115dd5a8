//! Per-field rule declarations and their builder/loader

use crate::engine::{self, ValidationOutcome};
use crate::error::FormigoError;
use crate::value::{Record, ValueKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Checks declared for a single field.
///
/// Serialized as `{ required?, type?, min?, email? }`. Any other key is
/// rejected when a spec is deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldRule {
    /// Value must be truthy
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Expected primitive kind of the value
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ValueKind>,
    /// Minimum character count, applied to string values only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,
    /// Truthy values must look like an email address
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub email: bool,
}

impl FieldRule {
    /// Create a rule with no checks
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// Whether the rule declares no checks at all
    pub fn is_empty(&self) -> bool {
        !self.required && self.kind.is_none() && self.min.is_none() && !self.email
    }
}

/// Ordered mapping from field name to its [`FieldRule`].
///
/// Fields are checked in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSpec {
    fields: IndexMap<String, FieldRule>,
}

impl RuleSpec {
    /// Create an empty rule spec
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare rules for a field. Redeclaring a field replaces its rule but
    /// keeps its original position.
    pub fn field(mut self, field: impl Into<String>, rule: FieldRule) -> Self {
        self.insert(field, rule);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, rule: FieldRule) -> Option<FieldRule> {
        self.fields.insert(field.into(), rule)
    }

    /// Get the rule declared for a field
    pub fn get(&self, field: &str) -> Option<&FieldRule> {
        self.fields.get(field)
    }

    /// Iterate declared fields in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.fields.iter().map(|(field, rule)| (field.as_str(), rule))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Names of all fields that have rules, in declaration order
    pub fn validated_fields(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Validate a record against this spec
    pub fn validate(&self, record: &Record) -> ValidationOutcome {
        engine::validate(record, self)
    }

    /// Parse a spec from JSON
    pub fn from_json_str(content: &str) -> Result<Self, FormigoError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a spec from YAML
    pub fn from_yaml_str(content: &str) -> Result<Self, FormigoError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a spec from disk. `.yaml`/`.yml` files are read as YAML, anything
    /// else as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FormigoError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let spec = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content)?,
            _ => Self::from_json_str(&content)?,
        };
        tracing::debug!(path = %path.display(), fields = spec.len(), "loaded rule spec");
        Ok(spec)
    }
}

impl<K: Into<String>> FromIterator<(K, FieldRule)> for RuleSpec {
    fn from_iter<I: IntoIterator<Item = (K, FieldRule)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(field, rule)| (field.into(), rule))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleSpec {
    type Item = (&'a String, &'a FieldRule);
    type IntoIter = indexmap::map::Iter<'a, String, FieldRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_declaration_order() {
        let rules = RuleSpec::new()
            .field("name", FieldRule::new().required().min(2))
            .field("email", FieldRule::new().email())
            .field("age", FieldRule::new().kind(ValueKind::Number));

        assert_eq!(rules.validated_fields(), ["name", "email", "age"]);
        assert_eq!(rules.get("name").unwrap().min, Some(2));
        assert!(rules.get("email").unwrap().email);
    }

    #[test]
    fn test_redeclared_field_keeps_position() {
        let rules = RuleSpec::new()
            .field("a", FieldRule::new())
            .field("b", FieldRule::new())
            .field("a", FieldRule::new().required());

        assert_eq!(rules.validated_fields(), ["a", "b"]);
        assert!(rules.get("a").unwrap().required);
    }

    #[test]
    fn test_from_json_str() {
        let rules = RuleSpec::from_json_str(
            r#"{
                "name": { "required": true, "min": 2 },
                "age": { "type": "number" },
                "email": { "email": true }
            }"#,
        )
        .unwrap();

        assert_eq!(rules.validated_fields(), ["name", "age", "email"]);
        assert_eq!(
            rules.get("name"),
            Some(&FieldRule::new().required().min(2))
        );
        assert_eq!(rules.get("age").unwrap().kind, Some(ValueKind::Number));
    }

    #[test]
    fn test_from_yaml_str() {
        let rules = RuleSpec::from_yaml_str(
            "username:\n  required: true\n  type: string\nbio: {}\n",
        )
        .unwrap();

        assert_eq!(rules.validated_fields(), ["username", "bio"]);
        assert!(rules.get("bio").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = RuleSpec::from_json_str(r#"{ "name": { "max": 3 } }"#).unwrap_err();
        assert!(matches!(err, FormigoError::Json(_)));
    }

    #[test]
    fn test_rejects_negative_min() {
        let err = RuleSpec::from_json_str(r#"{ "name": { "min": -1 } }"#).unwrap_err();
        assert!(matches!(err, FormigoError::Json(_)));
    }

    #[test]
    fn test_rejects_unknown_type() {
        let err = RuleSpec::from_yaml_str("age:\n  type: integer\n").unwrap_err();
        assert!(matches!(err, FormigoError::Yaml(_)));
    }

    #[test]
    fn test_serializes_only_declared_checks() {
        let rules = RuleSpec::new().field("name", FieldRule::new().required());

        assert_eq!(
            serde_json::to_value(&rules).unwrap(),
            serde_json::json!({ "name": { "required": true } })
        );
    }

    #[test]
    fn test_collect_from_pairs() {
        let rules: RuleSpec = vec![("x", FieldRule::new()), ("y", FieldRule::new().email())]
            .into_iter()
            .collect();

        assert_eq!(rules.len(), 2);
        assert_eq!((&rules).into_iter().count(), 2);
    }
}
