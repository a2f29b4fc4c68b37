//! Parameters for testssl.sh TLS checks.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::validation::{FieldKind, FieldSpec};

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("severity", FieldKind::String),
    FieldSpec::new("timeout", FieldKind::Number),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestSslParams {
    /// Minimum severity to report; interpreted by testssl.sh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Number>,
}
