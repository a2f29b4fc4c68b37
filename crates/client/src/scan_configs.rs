//! `/scan-configs` endpoints.
//!
//! Create and update only accept a [`ScanConfig`] and re-check it before
//! sending, so an invalid configuration never reaches the network.

use reqwest::{Method, StatusCode};
use surface_core::scan_config::{ScanConfig, ScanConfigCandidate, ScanConfigRecord};
use surface_core::types::EntityId;

use crate::api::ApiClient;
use crate::error::{ClientError, ClientResult};

impl ApiClient {
    pub async fn list_scan_configs(&self) -> ClientResult<Vec<ScanConfigRecord>> {
        self.get_json("/scan-configs").await
    }

    pub async fn get_scan_config(&self, id: EntityId) -> ClientResult<ScanConfigRecord> {
        self.get_json(&format!("/scan-configs/{id}")).await
    }

    /// `POST /scan-configs`, expecting `201 Created`. Any id on `config` is
    /// ignored; the backend assigns one.
    pub async fn create_scan_config(&self, config: &ScanConfig) -> ClientResult<ScanConfigRecord> {
        config.ensure_valid()?;
        tracing::info!(
            name = %config.name,
            scanner_type = %config.scanner_type(),
            "Creating scan config"
        );
        self.send_json(
            Method::POST,
            "/scan-configs",
            &config.body(),
            StatusCode::CREATED,
        )
        .await
    }

    /// `PUT /scan-configs/{id}`. Fails locally with
    /// [`ClientError::MissingId`] if `config` was never persisted.
    pub async fn update_scan_config(&self, config: &ScanConfig) -> ClientResult<ScanConfigRecord> {
        let id = config.id.ok_or(ClientError::MissingId)?;
        config.ensure_valid()?;
        tracing::info!(%id, scanner_type = %config.scanner_type(), "Updating scan config");
        self.send_json(
            Method::PUT,
            &format!("/scan-configs/{id}"),
            &config.body(),
            StatusCode::OK,
        )
        .await
    }

    pub async fn delete_scan_config(&self, id: EntityId) -> ClientResult<()> {
        tracing::info!(%id, "Deleting scan config");
        self.send_empty(Method::DELETE, &format!("/scan-configs/{id}"), StatusCode::OK)
            .await
    }

    /// Validate `candidate`, then create it (no id) or update it (with id).
    pub async fn submit_scan_config(
        &self,
        candidate: &ScanConfigCandidate,
    ) -> ClientResult<ScanConfigRecord> {
        let config = candidate.validate()?;
        match config.id {
            Some(_) => self.update_scan_config(&config).await,
            None => self.create_scan_config(&config).await,
        }
    }
}
