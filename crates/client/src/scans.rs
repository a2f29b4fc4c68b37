//! `/scans` endpoints.

use reqwest::{Method, StatusCode};
use surface_core::finding::Finding;
use surface_core::scan::{Scan, ScanAccepted, StartScan};
use surface_core::types::EntityId;

use crate::api::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    /// `POST /scans`. The backend queues the scan and answers
    /// `202 Accepted`; any other status is a failure.
    pub async fn start_scan(&self, request: &StartScan) -> ClientResult<ScanAccepted> {
        tracing::info!(
            project_id = %request.project_id,
            scan_config_id = %request.scan_config_id,
            targets = request.target_ids.len(),
            "Starting scan"
        );
        self.send_json(Method::POST, "/scans", request, StatusCode::ACCEPTED)
            .await
    }

    pub async fn list_scans(&self) -> ClientResult<Vec<Scan>> {
        self.get_json("/scans").await
    }

    pub async fn get_scan(&self, id: EntityId) -> ClientResult<Scan> {
        self.get_json(&format!("/scans/{id}")).await
    }

    /// Only pending or running scans can be cancelled; the backend rejects
    /// the rest.
    pub async fn cancel_scan(&self, id: EntityId) -> ClientResult<()> {
        tracing::info!(%id, "Cancelling scan");
        self.send_empty(Method::POST, &format!("/scans/{id}/cancel"), StatusCode::OK)
            .await
    }

    pub async fn scan_findings(&self, id: EntityId) -> ClientResult<Vec<Finding>> {
        self.get_json(&format!("/scans/{id}/findings")).await
    }
}
