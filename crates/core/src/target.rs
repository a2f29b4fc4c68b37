//! Scan targets: IPv4 addresses, IPv4 CIDR ranges and domain names.

use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9](?:\.[a-zA-Z]{2,})+$")
        .expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Ip,
    Cidr,
    Domain,
}

impl TargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Ip => "ip",
            TargetType::Cidr => "cidr",
            TargetType::Domain => "domain",
        }
    }

    /// Check that `value` is well-formed for this target type.
    pub fn check_value(&self, value: &str) -> Result<(), CoreError> {
        let ok = match self {
            TargetType::Ip => is_valid_ip(value),
            TargetType::Cidr => is_valid_cidr(value),
            TargetType::Domain => is_valid_domain(value),
        };
        if ok {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "`{value}` is not a valid {} target",
                self.as_str()
            )))
        }
    }

    /// Guess the type of a bare value, trying IP, then CIDR, then domain.
    pub fn infer(value: &str) -> Option<TargetType> {
        [TargetType::Ip, TargetType::Cidr, TargetType::Domain]
            .into_iter()
            .find(|t| t.check_value(value).is_ok())
    }
}

impl std::str::FromStr for TargetType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ip" => Ok(TargetType::Ip),
            "cidr" => Ok(TargetType::Cidr),
            "domain" => Ok(TargetType::Domain),
            other => Err(CoreError::Validation(format!("Unknown target type: {other}"))),
        }
    }
}

/// Dotted-quad IPv4.
pub fn is_valid_ip(value: &str) -> bool {
    value.parse::<Ipv4Addr>().is_ok()
}

/// IPv4 address plus a `/0`..`/32` prefix.
pub fn is_valid_cidr(value: &str) -> bool {
    let Some((ip, prefix)) = value.split_once('/') else {
        return false;
    };
    is_valid_ip(ip) && prefix.parse::<u8>().is_ok_and(|p| p <= 32)
}

pub fn is_valid_domain(value: &str) -> bool {
    DOMAIN_RE.is_match(value)
}

/// A target row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: EntityId,
    pub project_id: EntityId,
    pub target_type: TargetType,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// DTO for creating a new target.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTarget {
    pub project_id: EntityId,
    pub target_type: TargetType,
    #[validate(length(min = 1))]
    pub value: String,
}

impl CreateTarget {
    pub fn ensure_valid(&self) -> Result<(), CoreError> {
        self.validate()?;
        self.target_type.check_value(&self.value)
    }
}

/// DTO for updating an existing target.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTarget {
    pub target_type: TargetType,
    #[validate(length(min = 1))]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl UpdateTarget {
    pub fn ensure_valid(&self) -> Result<(), CoreError> {
        self.validate()?;
        self.target_type.check_value(&self.value)
    }
}

// ---------------------------------------------------------------------------
// Relations
// ---------------------------------------------------------------------------

/// How one target relates to another, e.g. a domain that resolves to an IP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    ResolvesTo,
    ParentOf,
    ChildOf,
    HostsService,
}

impl RelationType {
    pub const ALL: [RelationType; 4] = [
        RelationType::ResolvesTo,
        RelationType::ParentOf,
        RelationType::ChildOf,
        RelationType::HostsService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::ResolvesTo => "resolves_to",
            RelationType::ParentOf => "parent_of",
            RelationType::ChildOf => "child_of",
            RelationType::HostsService => "hosts_service",
        }
    }
}

impl std::str::FromStr for RelationType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown relation type: {s}")))
    }
}

/// A directed edge between two targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRelation {
    pub id: EntityId,
    pub source_id: EntityId,
    pub destination_id: EntityId,
    pub relation_type: RelationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// DTO for creating a relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTargetRelation {
    pub source_id: EntityId,
    pub destination_id: EntityId,
    pub relation_type: RelationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl CreateTargetRelation {
    pub fn ensure_valid(&self) -> Result<(), CoreError> {
        if self.source_id == self.destination_id {
            return Err(CoreError::Validation(format!(
                "target {} cannot be related to itself",
                self.source_id
            )));
        }
        Ok(())
    }
}

/// Reply to a bulk relation insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkCreated {
    pub count: usize,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn ip_addresses() {
        assert!(is_valid_ip("192.168.1.1"));
        assert!(is_valid_ip("0.0.0.0"));
        assert!(!is_valid_ip("256.1.1.1"));
        assert!(!is_valid_ip("10.0.0"));
        assert!(!is_valid_ip("example.com"));
    }

    #[test]
    fn cidr_ranges() {
        assert!(is_valid_cidr("192.168.1.0/24"));
        assert!(is_valid_cidr("10.0.0.0/0"));
        assert!(is_valid_cidr("10.0.0.1/32"));
        assert!(!is_valid_cidr("10.0.0.0/33"));
        assert!(!is_valid_cidr("10.0.0.0"));
        assert!(!is_valid_cidr("10.0.0.0/abc"));
    }

    #[test]
    fn domains() {
        assert!(is_valid_domain("example.com"));
        assert!(is_valid_domain("api-01.example.co.uk"));
        assert!(!is_valid_domain("localhost"));
        assert!(!is_valid_domain("-bad.com"));
        assert!(!is_valid_domain("example.c0m"));
    }

    #[test]
    fn infer_prefers_ip_over_domain() {
        assert_eq!(TargetType::infer("10.1.2.3"), Some(TargetType::Ip));
        assert_eq!(TargetType::infer("10.1.2.0/24"), Some(TargetType::Cidr));
        assert_eq!(TargetType::infer("example.org"), Some(TargetType::Domain));
        assert_eq!(TargetType::infer("not a target"), None);
    }

    #[test]
    fn create_target_checks_value_against_type() {
        let dto = CreateTarget {
            project_id: uuid::Uuid::nil(),
            target_type: TargetType::Cidr,
            value: "192.168.1.1".into(),
        };
        assert_matches!(dto.ensure_valid(), Err(CoreError::Validation(_)));

        let dto = CreateTarget {
            value: "192.168.1.0/24".into(),
            ..dto
        };
        assert!(dto.ensure_valid().is_ok());
    }

    #[test]
    fn empty_value_is_rejected() {
        let dto = UpdateTarget {
            target_type: TargetType::Domain,
            value: String::new(),
            metadata: None,
        };
        assert_matches!(dto.ensure_valid(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn relation_row_decodes_with_object_metadata() {
        let relation: TargetRelation = serde_json::from_value(serde_json::json!({
            "id": uuid::Uuid::nil(),
            "source_id": uuid::Uuid::nil(),
            "destination_id": uuid::Uuid::nil(),
            "relation_type": "resolves_to",
            "metadata": {},
            "created_at": "2024-05-01T12:00:00Z",
            "updated_at": "2024-05-01T12:00:00Z",
        }))
        .unwrap();
        assert_eq!(relation.relation_type, RelationType::ResolvesTo);
        assert_eq!(relation.metadata, Some(serde_json::json!({})));
    }

    #[test]
    fn relation_types_use_snake_case() {
        assert_eq!("hosts_service".parse::<RelationType>().unwrap(), RelationType::HostsService);
        assert!("resolvesTo".parse::<RelationType>().is_err());
        assert_eq!(
            serde_json::to_value(RelationType::ParentOf).unwrap(),
            serde_json::json!("parent_of")
        );
    }

    #[test]
    fn self_relation_is_rejected() {
        let id = uuid::Uuid::new_v4();
        let dto = CreateTargetRelation {
            source_id: id,
            destination_id: id,
            relation_type: RelationType::ChildOf,
            metadata: None,
        };
        assert_matches!(dto.ensure_valid(), Err(CoreError::Validation(_)));
    }
}
