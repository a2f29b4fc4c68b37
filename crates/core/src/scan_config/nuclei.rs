//! Parameters for the nuclei template scanner.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::validation::{FieldKind, FieldSpec};

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("template_tags", FieldKind::StringList),
    FieldSpec::new("template_paths", FieldKind::StringList),
    FieldSpec::new("template_exclude", FieldKind::StringList),
    FieldSpec::new("severity", FieldKind::String),
    FieldSpec::new("timeout", FieldKind::Number),
    FieldSpec::new("rate_limit", FieldKind::Number),
    FieldSpec::new("bulk_size", FieldKind::Number),
    FieldSpec::new("templates_dir", FieldKind::String),
    FieldSpec::new("headless", FieldKind::Boolean),
    FieldSpec::new("include_all", FieldKind::Boolean),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NucleiParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_paths: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_exclude: Option<Vec<String>>,
    /// Comma-separated severities, e.g. `"high,critical"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulk_size: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headless: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_all: Option<bool>,
}
