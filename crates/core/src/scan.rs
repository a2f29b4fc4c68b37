//! Scan launch requests and scan status.
//!
//! Scans are executed by the backend's workers; this side only submits
//! them and reads their state back.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

/// Scan lifecycle as reported by the backend.
///
/// `Pending -> Running -> Completed | Failed`, and `Cancelled` from either
/// of the first two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
}

impl ScanStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ScanStatus::Completed | ScanStatus::Failed | ScanStatus::Cancelled
        )
    }

    /// The backend only accepts cancellation of pending or running scans.
    pub fn is_cancellable(&self) -> bool {
        !self.is_terminal()
    }
}

/// A scan row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scan {
    pub id: EntityId,
    pub project_id: EntityId,
    pub scan_config_id: EntityId,
    pub status: ScanStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}

/// Body for `POST /scans`.
///
/// An empty `target_ids` asks the backend to scan every target in the
/// project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartScan {
    pub project_id: EntityId,
    pub scan_config_id: EntityId,
    pub target_ids: Vec<EntityId>,
}

/// Response to an accepted scan launch (HTTP 202).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanAccepted {
    pub message: String,
    pub scan_id: EntityId,
}
