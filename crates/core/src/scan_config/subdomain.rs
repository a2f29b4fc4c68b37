//! Parameters for subdomain enumeration.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::validation::{FieldKind, FieldSpec};

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("recursive", FieldKind::Boolean),
    FieldSpec::new("resolve_ip", FieldKind::Boolean),
    FieldSpec::new("wordlist", FieldKind::String),
    FieldSpec::new("timeout", FieldKind::Number),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubdomainParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve_ip: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wordlist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Number>,
}
