//! Strict shape checking for free-form JSON objects.
//!
//! A shape is a static list of [`FieldSpec`]s. Every field is optional;
//! fields that are present must match their declared [`FieldKind`], and
//! fields that are not declared at all are rejected. All violations are
//! collected; nothing short-circuits.

use serde_json::Value;

use super::rules::{
    FieldViolation, RULE_ENUM_VALUES, RULE_TYPE_CHECK, RULE_UNKNOWN_FIELD,
};

/// Declared type of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// Any JSON number. Numeric strings are not coerced.
    Number,
    Boolean,
    StringList,
    /// A string drawn from a closed, case-sensitive set.
    OneOf(&'static [&'static str]),
    /// A list whose every element is drawn from a closed set. Duplicates and
    /// the empty list are allowed.
    ListOf(&'static [&'static str]),
}

/// One declared field of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Check `value` against `fields`, reporting paths under `path`.
///
/// Returns an empty vector when the object conforms.
pub fn check_object(path: &str, value: &Value, fields: &[FieldSpec]) -> Vec<FieldViolation> {
    let map = match value {
        Value::Object(map) => map,
        other => {
            return vec![FieldViolation::new(
                path,
                RULE_TYPE_CHECK,
                format!("expected an object, got {}", describe(other)),
                Some(other),
            )];
        }
    };

    let mut violations = Vec::new();
    for (key, field_value) in map {
        let field_path = format!("{path}.{key}");
        match fields.iter().find(|spec| spec.name == key) {
            Some(spec) => check_field(&field_path, spec.kind, field_value, &mut violations),
            None => violations.push(FieldViolation::new(
                field_path,
                RULE_UNKNOWN_FIELD,
                format!("unknown field `{key}`"),
                Some(field_value),
            )),
        }
    }
    violations
}

fn check_field(path: &str, kind: FieldKind, value: &Value, out: &mut Vec<FieldViolation>) {
    match kind {
        FieldKind::String => expect_type(path, "a string", value.is_string(), value, out),
        FieldKind::Number => expect_type(path, "a number", value.is_number(), value, out),
        FieldKind::Boolean => expect_type(path, "a boolean", value.is_boolean(), value, out),
        FieldKind::OneOf(allowed) => check_member(path, allowed, value, out),
        FieldKind::StringList => {
            let Some(items) = as_list(path, value, out) else {
                return;
            };
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{path}[{i}]");
                expect_type(&item_path, "a string", item.is_string(), item, out);
            }
        }
        FieldKind::ListOf(allowed) => {
            let Some(items) = as_list(path, value, out) else {
                return;
            };
            for (i, item) in items.iter().enumerate() {
                check_member(&format!("{path}[{i}]"), allowed, item, out);
            }
        }
    }
}

fn expect_type(path: &str, expected: &str, ok: bool, value: &Value, out: &mut Vec<FieldViolation>) {
    if !ok {
        out.push(FieldViolation::new(
            path,
            RULE_TYPE_CHECK,
            format!("expected {expected}, got {}", describe(value)),
            Some(value),
        ));
    }
}

fn check_member(path: &str, allowed: &[&str], value: &Value, out: &mut Vec<FieldViolation>) {
    match value.as_str() {
        Some(s) if allowed.contains(&s) => {}
        Some(s) => out.push(FieldViolation::new(
            path,
            RULE_ENUM_VALUES,
            format!("`{s}` is not one of: {}", allowed.join(", ")),
            Some(value),
        )),
        None => expect_type(path, "a string", false, value, out),
    }
}

fn as_list<'a>(path: &str, value: &'a Value, out: &mut Vec<FieldViolation>) -> Option<&'a Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        other => {
            expect_type(path, "a list", false, other, out);
            None
        }
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
