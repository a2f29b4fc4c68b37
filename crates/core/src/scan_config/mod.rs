//! Scan configuration model and validator.
//!
//! A scan configuration pairs a scanner type with a parameter record whose
//! shape is fixed by that type. Callers hand in a [`ScanConfigCandidate`]
//! (parameters as free-form JSON) and get back either a typed [`ScanConfig`]
//! or every field-level violation at once.
//!
//! Validation is pure and stateless.

pub mod dns;
pub mod httpx;
pub mod nmap;
pub mod nuclei;
pub mod subdomain;
pub mod test_ssl;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};
use crate::validation::rules::{RULE_REQUIRED, RULE_TYPE_CHECK};
use crate::validation::{check_object, FieldSpec, FieldViolation, ValidationErrors};

pub use dns::{DnsParams, DnsRecordType};
pub use httpx::HttpxParams;
pub use nmap::{NmapParams, NmapScanType, NmapTiming};
pub use nuclei::NucleiParams;
pub use subdomain::SubdomainParams;
pub use test_ssl::TestSslParams;

// ---------------------------------------------------------------------------
// Scanner type
// ---------------------------------------------------------------------------

/// The closed set of supported scan engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScannerType {
    #[serde(rename = "nmap")]
    Nmap,
    #[serde(rename = "dns")]
    Dns,
    #[serde(rename = "subdomain")]
    Subdomain,
    #[serde(rename = "nuclei")]
    Nuclei,
    #[serde(rename = "httpx")]
    Httpx,
    #[serde(rename = "testSSL")]
    TestSsl,
}

impl ScannerType {
    pub const ALL: [ScannerType; 6] = [
        ScannerType::Nmap,
        ScannerType::Dns,
        ScannerType::Subdomain,
        ScannerType::Nuclei,
        ScannerType::Httpx,
        ScannerType::TestSsl,
    ];

    /// Wire tag, exactly as the backend stores it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScannerType::Nmap => "nmap",
            ScannerType::Dns => "dns",
            ScannerType::Subdomain => "subdomain",
            ScannerType::Nuclei => "nuclei",
            ScannerType::Httpx => "httpx",
            ScannerType::TestSsl => "testSSL",
        }
    }

    /// The parameter shape registered for this scanner.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            ScannerType::Nmap => nmap::FIELDS,
            ScannerType::Dns => dns::FIELDS,
            ScannerType::Subdomain => subdomain::FIELDS,
            ScannerType::Nuclei => nuclei::FIELDS,
            ScannerType::Httpx => httpx::FIELDS,
            ScannerType::TestSsl => test_ssl::FIELDS,
        }
    }
}

impl fmt::Display for ScannerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the wire tags.
impl FromStr for ScannerType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScannerType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownScannerType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Typed parameters
// ---------------------------------------------------------------------------

/// Scanner parameters, one variant per scanner type.
///
/// Serializes as `"scanner_type": <tag>, "parameters": {...}` so it can be
/// flattened into request bodies.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "scanner_type", content = "parameters")]
pub enum ScanParameters {
    #[serde(rename = "nmap")]
    Nmap(NmapParams),
    #[serde(rename = "dns")]
    Dns(DnsParams),
    #[serde(rename = "subdomain")]
    Subdomain(SubdomainParams),
    #[serde(rename = "nuclei")]
    Nuclei(NucleiParams),
    #[serde(rename = "httpx")]
    Httpx(HttpxParams),
    #[serde(rename = "testSSL")]
    TestSsl(TestSslParams),
}

impl ScanParameters {
    /// Parameters of the given type with every field unset.
    pub fn empty(scanner_type: ScannerType) -> Self {
        match scanner_type {
            ScannerType::Nmap => ScanParameters::Nmap(NmapParams::default()),
            ScannerType::Dns => ScanParameters::Dns(DnsParams::default()),
            ScannerType::Subdomain => ScanParameters::Subdomain(SubdomainParams::default()),
            ScannerType::Nuclei => ScanParameters::Nuclei(NucleiParams::default()),
            ScannerType::Httpx => ScanParameters::Httpx(HttpxParams::default()),
            ScannerType::TestSsl => ScanParameters::TestSsl(TestSslParams::default()),
        }
    }

    pub fn scanner_type(&self) -> ScannerType {
        match self {
            ScanParameters::Nmap(_) => ScannerType::Nmap,
            ScanParameters::Dns(_) => ScannerType::Dns,
            ScanParameters::Subdomain(_) => ScannerType::Subdomain,
            ScanParameters::Nuclei(_) => ScannerType::Nuclei,
            ScanParameters::Httpx(_) => ScannerType::Httpx,
            ScanParameters::TestSsl(_) => ScannerType::TestSsl,
        }
    }

    /// The parameter record alone, as JSON.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            ScanParameters::Nmap(p) => serde_json::to_value(p),
            ScanParameters::Dns(p) => serde_json::to_value(p),
            ScanParameters::Subdomain(p) => serde_json::to_value(p),
            ScanParameters::Nuclei(p) => serde_json::to_value(p),
            ScanParameters::Httpx(p) => serde_json::to_value(p),
            ScanParameters::TestSsl(p) => serde_json::to_value(p),
        }
    }

    /// Decode a payload that already passed the shape check.
    fn decode(scanner_type: ScannerType, params: &Value) -> Result<Self, serde_json::Error> {
        Ok(match scanner_type {
            ScannerType::Nmap => ScanParameters::Nmap(NmapParams::deserialize(params)?),
            ScannerType::Dns => ScanParameters::Dns(DnsParams::deserialize(params)?),
            ScannerType::Subdomain => {
                ScanParameters::Subdomain(SubdomainParams::deserialize(params)?)
            }
            ScannerType::Nuclei => ScanParameters::Nuclei(NucleiParams::deserialize(params)?),
            ScannerType::Httpx => ScanParameters::Httpx(HttpxParams::deserialize(params)?),
            ScannerType::TestSsl => ScanParameters::TestSsl(TestSslParams::deserialize(params)?),
        })
    }
}

// ---------------------------------------------------------------------------
// Scan configuration
// ---------------------------------------------------------------------------

/// A validated scan configuration.
///
/// [`validate`], `TryFrom` and deserializing all produce values whose
/// `parameters` match their scanner type. The fields stay public for
/// editing, so a value built or changed by hand may not; call
/// [`ScanConfig::ensure_valid`] before trusting one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScanConfigCandidate")]
pub struct ScanConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    #[serde(flatten)]
    pub parameters: ScanParameters,
    pub active: bool,
}

impl ScanConfig {
    pub fn scanner_type(&self) -> ScannerType {
        self.parameters.scanner_type()
    }

    /// Re-run [`validate`] over the current field values.
    pub fn ensure_valid(&self) -> Result<(), CoreError> {
        validate(&ScanConfigCandidate::from(self)).map(|_| ())
    }

    /// Request body for create/update calls: `{name, scanner_type, parameters, active}`.
    pub fn body(&self) -> ScanConfigBody<'_> {
        ScanConfigBody {
            name: &self.name,
            parameters: &self.parameters,
            active: self.active,
        }
    }
}

impl TryFrom<ScanConfigCandidate> for ScanConfig {
    type Error = CoreError;

    fn try_from(candidate: ScanConfigCandidate) -> Result<Self, Self::Error> {
        validate(&candidate)
    }
}

/// Wire body for `POST`/`PUT /scan-configs`. Never carries the id.
#[derive(Debug, Serialize)]
pub struct ScanConfigBody<'a> {
    pub name: &'a str,
    #[serde(flatten)]
    pub parameters: &'a ScanParameters,
    pub active: bool,
}

/// Unvalidated input, as collected from a form, a file, or the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfigCandidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    pub scanner_type: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default = "empty_object")]
    pub parameters: Value,
}

impl ScanConfigCandidate {
    /// Build a candidate whose parameters arrive as raw JSON text.
    ///
    /// Text that does not parse is reported as a single
    /// [`CoreError::MalformedPayload`] before any shape checking.
    pub fn from_raw_parameters(
        name: impl Into<String>,
        scanner_type: impl Into<String>,
        active: bool,
        raw_parameters: &str,
    ) -> Result<Self, CoreError> {
        let parameters = serde_json::from_str(raw_parameters)
            .map_err(|e| CoreError::MalformedPayload(e.to_string()))?;
        Ok(Self {
            id: None,
            name: name.into(),
            scanner_type: scanner_type.into(),
            active,
            parameters,
        })
    }

    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn validate(&self) -> Result<ScanConfig, CoreError> {
        validate(self)
    }
}

impl From<&ScanConfig> for ScanConfigCandidate {
    fn from(config: &ScanConfig) -> Self {
        Self {
            id: config.id,
            name: config.name.clone(),
            scanner_type: config.scanner_type().as_str().to_string(),
            active: config.active,
            parameters: config.parameters.to_value().unwrap_or_else(|_| empty_object()),
        }
    }
}

/// A scan configuration as returned by the backend. Not yet validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfigRecord {
    pub id: EntityId,
    pub name: String,
    pub scanner_type: String,
    #[serde(default)]
    pub parameters: Value,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl ScanConfigRecord {
    /// The backend stores absent parameters as `null`; that reads as `{}`.
    pub fn to_candidate(&self) -> ScanConfigCandidate {
        let parameters = if self.parameters.is_null() {
            empty_object()
        } else {
            self.parameters.clone()
        };
        ScanConfigCandidate {
            id: Some(self.id),
            name: self.name.clone(),
            scanner_type: self.scanner_type.clone(),
            active: self.active,
            parameters,
        }
    }

    pub fn validate(&self) -> Result<ScanConfig, CoreError> {
        validate(&self.to_candidate())
    }
}

fn default_active() -> bool {
    true
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a candidate against the schema registered for its scanner type.
///
/// 1. An unknown `scanner_type` fails immediately with
///    [`CoreError::UnknownScannerType`].
/// 2. Otherwise the name and every parameter field are checked and all
///    violations are returned together as [`CoreError::SchemaViolation`].
///
/// Absent parameter fields stay unset; no defaults are filled in.
pub fn validate(candidate: &ScanConfigCandidate) -> Result<ScanConfig, CoreError> {
    let scanner_type: ScannerType = candidate.scanner_type.parse()?;

    let mut violations = Vec::new();
    if candidate.name.trim().is_empty() {
        violations.push(FieldViolation::new(
            "name",
            RULE_REQUIRED,
            "name must not be empty",
            None,
        ));
    }
    violations.extend(check_object(
        "parameters",
        &candidate.parameters,
        scanner_type.fields(),
    ));
    if !violations.is_empty() {
        return Err(CoreError::SchemaViolation(ValidationErrors::new(violations)));
    }

    let parameters = ScanParameters::decode(scanner_type, &candidate.parameters).map_err(|e| {
        CoreError::SchemaViolation(ValidationErrors::new(vec![FieldViolation::new(
            "parameters",
            RULE_TYPE_CHECK,
            e.to_string(),
            None,
        )]))
    })?;

    Ok(ScanConfig {
        id: candidate.id,
        name: candidate.name.clone(),
        parameters,
        active: candidate.active,
    })
}
