//! Parameters for the httpx HTTP prober.
//!
//! Most fields are probe toggles that map one-to-one onto httpx flags.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::validation::{FieldKind, FieldSpec};

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("timeout", FieldKind::Number),
    FieldSpec::new("threads", FieldKind::Number),
    FieldSpec::new("follow_redirects", FieldKind::Boolean),
    FieldSpec::new("tech_detect", FieldKind::Boolean),
    FieldSpec::new("status_code", FieldKind::Boolean),
    FieldSpec::new("title", FieldKind::Boolean),
    FieldSpec::new("web_server", FieldKind::Boolean),
    FieldSpec::new("content_type", FieldKind::Boolean),
    FieldSpec::new("tls", FieldKind::Boolean),
    FieldSpec::new("favicon", FieldKind::Boolean),
    FieldSpec::new("jarm", FieldKind::Boolean),
    FieldSpec::new("probe", FieldKind::Boolean),
    FieldSpec::new("http2", FieldKind::Boolean),
    FieldSpec::new("security_headers", FieldKind::Boolean),
    FieldSpec::new("extract_cname", FieldKind::Boolean),
    FieldSpec::new("ports", FieldKind::String),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpxParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_redirects: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_detect: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_server: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jarm: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http2: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_headers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract_cname: Option<bool>,
    /// Port list in httpx syntax, e.g. `"80,443,8000-8100"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<String>,
}
