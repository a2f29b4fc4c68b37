//! Field-level validation primitives.
//!
//! [`rules`] holds the violation types returned to callers; [`shape`] checks
//! a free-form JSON object against a fixed, declared field set.

pub mod rules;
pub mod shape;

pub use rules::{FieldViolation, ValidationErrors};
pub use shape::{check_object, FieldKind, FieldSpec};
