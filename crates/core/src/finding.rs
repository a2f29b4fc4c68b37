//! Security findings and severities.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

/// Finding severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Unknown,
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Unknown,
        Severity::Info,
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Unknown => "unknown",
            Severity::Info => "info",
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|sev| sev.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown severity: {s}")))
    }
}

/// A finding row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_id: Option<EntityId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub severity: Severity,
    pub finding_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub manual: bool,
    #[serde(default)]
    pub fixed: bool,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovered_at: Option<Timestamp>,
}

/// DTO for creating or updating a finding.
///
/// The backend ties every finding to the scan that produced it, so `scan_id`
/// is required even for findings entered by hand.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindingInput {
    pub scan_id: EntityId,
    pub target_id: EntityId,
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub severity: Severity,
    #[validate(length(min = 1))]
    pub finding_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub manual: bool,
}

impl FindingInput {
    /// `unknown` is only ever assigned by scanners; it cannot be submitted.
    pub fn ensure_valid(&self) -> Result<(), CoreError> {
        self.validate()?;
        if self.severity == Severity::Unknown {
            return Err(CoreError::Validation(format!(
                "severity must be one of: {}",
                Severity::ALL
                    .iter()
                    .filter(|s| **s != Severity::Unknown)
                    .map(Severity::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }
        Ok(())
    }
}
