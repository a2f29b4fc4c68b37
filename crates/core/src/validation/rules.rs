//! Validation violation types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rule identifiers carried in [`FieldViolation::rule_type`].
pub const RULE_REQUIRED: &str = "required";
pub const RULE_TYPE_CHECK: &str = "type_check";
pub const RULE_ENUM_VALUES: &str = "enum_values";
pub const RULE_UNKNOWN_FIELD: &str = "unknown_field";

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Dotted path to the offending field, e.g. `parameters.record_types[1]`.
    pub field: String,
    pub rule_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl FieldViolation {
    pub fn new(
        field: impl Into<String>,
        rule_type: &str,
        message: impl Into<String>,
        value: Option<&serde_json::Value>,
    ) -> Self {
        Self {
            field: field.into(),
            rule_type: rule_type.to_string(),
            message: message.into(),
            value: value.cloned(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every violation found in one validation pass.
///
/// Never empty when returned inside an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self(violations)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldViolation> {
        self.0.iter()
    }

    /// Look up the first violation reported for `field`.
    pub fn for_field(&self, field: &str) -> Option<&FieldViolation> {
        self.0.iter().find(|v| v.field == field)
    }

    pub fn into_inner(self) -> Vec<FieldViolation> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldViolation;
    type IntoIter = std::slice::Iter<'a, FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_joins_all_violations() {
        let errors = ValidationErrors::new(vec![
            FieldViolation::new("name", RULE_REQUIRED, "must not be empty", None),
            FieldViolation::new(
                "parameters.timeout",
                RULE_TYPE_CHECK,
                "expected a number, got a string",
                Some(&json!("30")),
            ),
        ]);
        assert_eq!(
            errors.to_string(),
            "name: must not be empty; parameters.timeout: expected a number, got a string"
        );
    }

    #[test]
    fn for_field_finds_matching_violation() {
        let errors = ValidationErrors::new(vec![FieldViolation::new(
            "parameters.timing",
            RULE_ENUM_VALUES,
            "not allowed",
            Some(&json!("6")),
        )]);
        let v = errors.for_field("parameters.timing").expect("violation present");
        assert_eq!(v.value, Some(json!("6")));
        assert!(errors.for_field("parameters.scan_type").is_none());
    }

    #[test]
    fn serializes_as_plain_list() {
        let errors = ValidationErrors::new(vec![FieldViolation::new(
            "name",
            RULE_REQUIRED,
            "must not be empty",
            None,
        )]);
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            value,
            json!([{"field": "name", "rule_type": "required", "message": "must not be empty"}])
        );
    }
}
