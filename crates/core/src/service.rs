//! Network services discovered on targets.
//!
//! Unlike scan-config parameters, a service's `port` is accepted either as a
//! JSON number or as a numeric string; form inputs send the latter.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

/// A service row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: EntityId,
    pub target_id: EntityId,
    #[serde(deserialize_with = "port_from_number_or_string")]
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_info: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovered_at: Option<Timestamp>,
}

/// DTO for registering a service by hand.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateService {
    pub target_id: EntityId,
    #[serde(deserialize_with = "port_from_number_or_string")]
    #[validate(range(min = 1))]
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_info: Option<serde_json::Value>,
}

impl CreateService {
    pub fn ensure_valid(&self) -> Result<(), CoreError> {
        Ok(self.validate()?)
    }
}

/// Parse a port given as text, e.g. `" 443 "`.
pub fn parse_port(raw: &str) -> Result<u16, CoreError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| CoreError::Validation(format!("`{raw}` is not a valid port")))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PortRepr {
    Number(u16),
    Text(String),
}

fn port_from_number_or_string<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    match PortRepr::deserialize(deserializer)? {
        PortRepr::Number(port) => Ok(port),
        PortRepr::Text(raw) => parse_port(&raw).map_err(serde::de::Error::custom),
    }
}
