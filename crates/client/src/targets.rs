//! `/targets` and `/relations` endpoints.

use reqwest::{Method, StatusCode};
use surface_core::finding::Finding;
use surface_core::service::Service;
use serde::Serialize;
use surface_core::target::{
    BulkCreated, CreateTarget, CreateTargetRelation, Target, TargetRelation, UpdateTarget,
};
use surface_core::types::EntityId;

use crate::api::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    pub async fn list_targets(&self) -> ClientResult<Vec<Target>> {
        self.get_json("/targets").await
    }

    pub async fn get_target(&self, id: EntityId) -> ClientResult<Target> {
        self.get_json(&format!("/targets/{id}")).await
    }

    /// The value is checked against its target type before sending.
    pub async fn create_target(&self, input: &CreateTarget) -> ClientResult<Target> {
        input.ensure_valid()?;
        self.send_json(Method::POST, "/targets", input, StatusCode::CREATED)
            .await
    }

    pub async fn update_target(&self, id: EntityId, input: &UpdateTarget) -> ClientResult<Target> {
        input.ensure_valid()?;
        self.send_json(Method::PUT, &format!("/targets/{id}"), input, StatusCode::OK)
            .await
    }

    pub async fn delete_target(&self, id: EntityId) -> ClientResult<()> {
        self.send_empty(Method::DELETE, &format!("/targets/{id}"), StatusCode::OK)
            .await
    }

    pub async fn target_findings(&self, id: EntityId) -> ClientResult<Vec<Finding>> {
        self.get_json(&format!("/targets/{id}/findings")).await
    }

    pub async fn target_services(&self, id: EntityId) -> ClientResult<Vec<Service>> {
        self.get_json(&format!("/targets/{id}/services")).await
    }

    /// Relations where the target is either source or destination.
    pub async fn target_relations(&self, id: EntityId) -> ClientResult<Vec<TargetRelation>> {
        self.get_json(&format!("/targets/{id}/relations")).await
    }

    // ---- relations ----

    pub async fn list_relations(&self) -> ClientResult<Vec<TargetRelation>> {
        self.get_json("/relations").await
    }

    pub async fn get_relation(&self, id: EntityId) -> ClientResult<TargetRelation> {
        self.get_json(&format!("/relations/{id}")).await
    }

    pub async fn create_relation(
        &self,
        input: &CreateTargetRelation,
    ) -> ClientResult<TargetRelation> {
        input.ensure_valid()?;
        self.send_json(Method::POST, "/relations", input, StatusCode::CREATED)
            .await
    }

    /// Insert several relations in one request. Every entry is checked first;
    /// one bad entry stops the whole batch.
    pub async fn create_relations(
        &self,
        relations: &[CreateTargetRelation],
    ) -> ClientResult<BulkCreated> {
        #[derive(Serialize)]
        struct Bulk<'a> {
            relations: &'a [CreateTargetRelation],
        }

        for relation in relations {
            relation.ensure_valid()?;
        }
        self.send_json(
            Method::POST,
            "/relations/bulk",
            &Bulk { relations },
            StatusCode::CREATED,
        )
        .await
    }

    pub async fn delete_relation(&self, id: EntityId) -> ClientResult<()> {
        self.send_empty(Method::DELETE, &format!("/relations/{id}"), StatusCode::OK)
            .await
    }
}
