//! `/services`, `/dns-records`, `/certificates` and `/applications`.

use reqwest::{Method, StatusCode};
use surface_core::inventory::{
    Application, Certificate, CreateApplication, CreateCertificate, CreateDnsRecord, DnsRecord,
};
use surface_core::service::{CreateService, Service};
use surface_core::types::EntityId;

use crate::api::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    // ---- services ----

    pub async fn list_services(&self) -> ClientResult<Vec<Service>> {
        self.get_json("/services").await
    }

    pub async fn get_service(&self, id: EntityId) -> ClientResult<Service> {
        self.get_json(&format!("/services/{id}")).await
    }

    pub async fn create_service(&self, input: &CreateService) -> ClientResult<Service> {
        input.ensure_valid()?;
        self.send_json(Method::POST, "/services", input, StatusCode::CREATED)
            .await
    }

    pub async fn delete_service(&self, id: EntityId) -> ClientResult<()> {
        self.send_empty(Method::DELETE, &format!("/services/{id}"), StatusCode::OK)
            .await
    }

    // ---- DNS records ----

    pub async fn get_dns_record(&self, id: EntityId) -> ClientResult<DnsRecord> {
        self.get_json(&format!("/dns-records/{id}")).await
    }

    pub async fn create_dns_record(&self, input: &CreateDnsRecord) -> ClientResult<DnsRecord> {
        input.ensure_valid()?;
        self.send_json(Method::POST, "/dns-records", input, StatusCode::CREATED)
            .await
    }

    pub async fn delete_dns_record(&self, id: EntityId) -> ClientResult<()> {
        self.send_empty(Method::DELETE, &format!("/dns-records/{id}"), StatusCode::OK)
            .await
    }

    // ---- certificates ----

    pub async fn get_certificate(&self, id: EntityId) -> ClientResult<Certificate> {
        self.get_json(&format!("/certificates/{id}")).await
    }

    pub async fn create_certificate(&self, input: &CreateCertificate) -> ClientResult<Certificate> {
        input.ensure_valid()?;
        self.send_json(Method::POST, "/certificates", input, StatusCode::CREATED)
            .await
    }

    pub async fn delete_certificate(&self, id: EntityId) -> ClientResult<()> {
        self.send_empty(Method::DELETE, &format!("/certificates/{id}"), StatusCode::OK)
            .await
    }

    // ---- applications ----

    pub async fn get_application(&self, id: EntityId) -> ClientResult<Application> {
        self.get_json(&format!("/applications/{id}")).await
    }

    pub async fn create_application(&self, input: &CreateApplication) -> ClientResult<Application> {
        input.ensure_valid()?;
        self.send_json(Method::POST, "/applications", input, StatusCode::CREATED)
            .await
    }

    pub async fn delete_application(&self, id: EntityId) -> ClientResult<()> {
        self.send_empty(Method::DELETE, &format!("/applications/{id}"), StatusCode::OK)
            .await
    }
}
