//! Parameters for DNS record enumeration.

use serde::{Deserialize, Serialize};

use crate::validation::{FieldKind, FieldSpec};

/// Wire names of [`DnsRecordType`].
pub const RECORD_TYPES: &[&str] = &["A", "AAAA", "CNAME", "MX", "TXT", "NS"];

pub(crate) const FIELDS: &[FieldSpec] = &[FieldSpec::new(
    "record_types",
    FieldKind::ListOf(RECORD_TYPES),
)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Ns,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DnsParams {
    /// An empty list means "no filter" to the executor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_types: Option<Vec<DnsRecordType>>,
}
