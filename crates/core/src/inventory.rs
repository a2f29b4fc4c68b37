//! Discovered inventory: DNS records, certificates and applications.
//!
//! These rows are mostly produced by scanner workers; the dashboard reads
//! them and occasionally adds or removes one by hand. Free-form `details` and
//! `metadata` columns are JSON objects on the wire.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// DNS records
// ---------------------------------------------------------------------------

/// A DNS record row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub id: EntityId,
    pub project_id: EntityId,
    pub target_id: EntityId,
    /// Absent for records added by hand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_id: Option<EntityId>,
    pub record_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovered_at: Option<Timestamp>,
}

/// DTO for adding a DNS record by hand.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDnsRecord {
    pub project_id: EntityId,
    pub target_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_id: Option<EntityId>,
    #[validate(length(min = 1))]
    pub record_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CreateDnsRecord {
    pub fn ensure_valid(&self) -> Result<(), CoreError> {
        Ok(self.validate()?)
    }
}

// ---------------------------------------------------------------------------
// Certificates
// ---------------------------------------------------------------------------

/// A TLS certificate row.
///
/// Link columns the backend never filled arrive as the nil UUID rather than
/// being omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<EntityId>,
    pub domain: String,
    pub issuer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovered_at: Option<Timestamp>,
}

impl Certificate {
    /// Whether the certificate has expired at `now`. Unknown expiry is not expired.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}

/// DTO for registering a certificate by hand.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCertificate {
    pub project_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<EntityId>,
    #[validate(length(min = 1))]
    pub domain: String,
    #[validate(length(min = 1))]
    pub issuer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CreateCertificate {
    pub fn ensure_valid(&self) -> Result<(), CoreError> {
        Ok(self.validate()?)
    }
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

/// An application (gitlab, wordpress, jira, ...) found on a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: EntityId,
    pub project_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_id: Option<EntityId>,
    pub name: String,
    #[serde(rename = "type")]
    pub app_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_target: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// DTO for registering an application by hand.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateApplication {
    pub project_id: EntityId,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub app_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_target: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl CreateApplication {
    pub fn ensure_valid(&self) -> Result<(), CoreError> {
        Ok(self.validate()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use serde_json::json;

    fn create_application(url: Option<&str>) -> CreateApplication {
        CreateApplication {
            project_id: uuid::Uuid::nil(),
            name: "grafana".into(),
            app_type: "dashboard".into(),
            version: None,
            description: None,
            url: url.map(str::to_string),
            host_target: None,
            service_id: None,
            metadata: None,
        }
    }

    #[test]
    fn application_type_uses_wire_name() {
        let value = serde_json::to_value(create_application(None)).unwrap();
        assert_eq!(value["type"], json!("dashboard"));
        assert!(value.get("app_type").is_none());
        assert!(value.get("host_target").is_none());
    }

    #[test]
    fn application_url_must_parse() {
        assert!(create_application(Some("https://grafana.example.com")).ensure_valid().is_ok());
        assert!(create_application(Some("not a url")).ensure_valid().is_err());
        assert!(create_application(None).ensure_valid().is_ok());
    }

    #[test]
    fn application_row_with_object_metadata_and_no_links() {
        let app: Application = serde_json::from_value(json!({
            "id": uuid::Uuid::nil(),
            "project_id": uuid::Uuid::nil(),
            "name": "GitLab",
            "type": "gitlab",
            "version": "",
            "description": "",
            "url": "",
            "metadata": {"edition": "ce"},
            "created_at": "2024-05-01T12:00:00Z",
            "updated_at": "2024-05-01T12:00:00Z",
        }))
        .unwrap();
        assert_eq!(app.host_target, None);
        assert_eq!(app.service_id, None);
        assert_eq!(app.metadata, Some(json!({"edition": "ce"})));
    }

    #[test]
    fn dns_record_row_with_object_details_and_no_scan() {
        let record: DnsRecord = serde_json::from_value(json!({
            "id": uuid::Uuid::nil(),
            "project_id": uuid::Uuid::nil(),
            "target_id": uuid::Uuid::nil(),
            "record_type": "MX",
            "record_value": "10 mail.example.com",
            "details": {},
            "discovered_at": "2024-05-01T12:00:00Z",
        }))
        .unwrap();
        assert_eq!(record.scan_id, None);
        assert_eq!(record.details, Some(json!({})));
    }

    #[test]
    fn certificate_row_without_project_or_scan() {
        let now = Utc::now();
        let mut cert: Certificate = serde_json::from_value(json!({
            "id": uuid::Uuid::nil(),
            "target_id": uuid::Uuid::nil(),
            "service_id": uuid::Uuid::nil(),
            "application_id": uuid::Uuid::nil(),
            "domain": "example.com",
            "issuer": "R3",
            "details": {"serial": "04:aa"},
        }))
        .unwrap();
        assert_eq!(cert.project_id, None);
        assert_eq!(cert.scan_id, None);
        assert!(!cert.is_expired_at(now));

        cert.expires_at = Some(now - Duration::days(1));
        assert!(cert.is_expired_at(now));
    }

    #[test]
    fn certificate_dto_requires_domain_and_issuer() {
        let cert = CreateCertificate {
            project_id: uuid::Uuid::nil(),
            scan_id: None,
            target_id: None,
            service_id: None,
            application_id: None,
            domain: String::new(),
            issuer: "R3".into(),
            expires_at: None,
            issued_at: None,
            details: Some(json!({})),
        };
        assert!(cert.ensure_valid().is_err());
    }

    #[test]
    fn dns_record_dto_sends_details_as_object() {
        let dto = CreateDnsRecord {
            project_id: uuid::Uuid::nil(),
            target_id: uuid::Uuid::nil(),
            scan_id: None,
            record_type: "TXT".into(),
            record_value: Some("v=spf1 -all".into()),
            details: Some(json!({"ttl": 300})),
        };
        assert!(dto.ensure_valid().is_ok());
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["details"], json!({"ttl": 300}));
        assert!(value.get("scan_id").is_none());
    }
}
