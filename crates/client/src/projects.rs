//! `/projects` endpoints, including the project-scoped listings.

use reqwest::{Method, StatusCode};
use surface_core::finding::Finding;
use surface_core::inventory::{Application, Certificate, DnsRecord};
use surface_core::project::{Project, ProjectInput};
use surface_core::scan::Scan;
use surface_core::service::Service;
use surface_core::target::Target;
use surface_core::types::EntityId;

use crate::api::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    pub async fn list_projects(&self) -> ClientResult<Vec<Project>> {
        self.get_json("/projects").await
    }

    pub async fn get_project(&self, id: EntityId) -> ClientResult<Project> {
        self.get_json(&format!("/projects/{id}")).await
    }

    pub async fn create_project(&self, input: &ProjectInput) -> ClientResult<Project> {
        input.ensure_valid()?;
        self.send_json(Method::POST, "/projects", input, StatusCode::CREATED)
            .await
    }

    pub async fn update_project(&self, id: EntityId, input: &ProjectInput) -> ClientResult<Project> {
        input.ensure_valid()?;
        self.send_json(Method::PUT, &format!("/projects/{id}"), input, StatusCode::OK)
            .await
    }

    pub async fn delete_project(&self, id: EntityId) -> ClientResult<()> {
        self.send_empty(Method::DELETE, &format!("/projects/{id}"), StatusCode::OK)
            .await
    }

    pub async fn project_targets(&self, id: EntityId) -> ClientResult<Vec<Target>> {
        self.get_json(&format!("/projects/{id}/targets")).await
    }

    pub async fn project_scans(&self, id: EntityId) -> ClientResult<Vec<Scan>> {
        self.get_json(&format!("/projects/{id}/scans")).await
    }

    pub async fn project_findings(&self, id: EntityId) -> ClientResult<Vec<Finding>> {
        self.get_json(&format!("/projects/{id}/findings")).await
    }

    pub async fn project_services(&self, id: EntityId) -> ClientResult<Vec<Service>> {
        self.get_json(&format!("/projects/{id}/services")).await
    }

    pub async fn project_applications(&self, id: EntityId) -> ClientResult<Vec<Application>> {
        self.get_json(&format!("/projects/{id}/applications")).await
    }

    pub async fn project_dns_records(&self, id: EntityId) -> ClientResult<Vec<DnsRecord>> {
        self.get_json(&format!("/projects/{id}/dns-records")).await
    }

    pub async fn project_certificates(&self, id: EntityId) -> ClientResult<Vec<Certificate>> {
        self.get_json(&format!("/projects/{id}/certificates")).await
    }
}
