//! `/findings` endpoints.

use reqwest::{Method, StatusCode};
use surface_core::finding::{Finding, FindingInput};
use surface_core::types::EntityId;

use crate::api::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    pub async fn list_findings(&self) -> ClientResult<Vec<Finding>> {
        self.get_json("/findings").await
    }

    pub async fn get_finding(&self, id: EntityId) -> ClientResult<Finding> {
        self.get_json(&format!("/findings/{id}")).await
    }

    pub async fn create_finding(&self, input: &FindingInput) -> ClientResult<Finding> {
        input.ensure_valid()?;
        self.send_json(Method::POST, "/findings", input, StatusCode::CREATED)
            .await
    }

    pub async fn update_finding(&self, id: EntityId, input: &FindingInput) -> ClientResult<Finding> {
        input.ensure_valid()?;
        self.send_json(Method::PUT, &format!("/findings/{id}"), input, StatusCode::OK)
            .await
    }

    pub async fn delete_finding(&self, id: EntityId) -> ClientResult<()> {
        self.send_empty(Method::DELETE, &format!("/findings/{id}"), StatusCode::OK)
            .await
    }

    /// `PUT /findings/{id}/fixed/{fixed}`.
    pub async fn mark_finding_fixed(&self, id: EntityId, fixed: bool) -> ClientResult<()> {
        self.send_empty(
            Method::PUT,
            &format!("/findings/{id}/fixed/{fixed}"),
            StatusCode::OK,
        )
        .await
    }

    /// `PUT /findings/{id}/verified/{verified}`.
    pub async fn mark_finding_verified(&self, id: EntityId, verified: bool) -> ClientResult<()> {
        self.send_empty(
            Method::PUT,
            &format!("/findings/{id}/verified/{verified}"),
            StatusCode::OK,
        )
        .await
    }
}
