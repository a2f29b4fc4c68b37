//! Parameters for the nmap port/service scanner.

use serde::{Deserialize, Serialize};

use crate::validation::{FieldKind, FieldSpec};

/// Wire names of [`NmapScanType`].
pub const SCAN_TYPES: &[&str] = &["quick", "comprehensive", "service", "all_ports", "basic"];

/// Wire names of [`NmapTiming`] (nmap's `-T0` .. `-T5`).
pub const TIMINGS: &[&str] = &["0", "1", "2", "3", "4", "5"];

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("scan_type", FieldKind::OneOf(SCAN_TYPES)),
    FieldSpec::new("port_range", FieldKind::String),
    FieldSpec::new("timing", FieldKind::OneOf(TIMINGS)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NmapScanType {
    Quick,
    Comprehensive,
    Service,
    AllPorts,
    Basic,
}

/// Timing template. Serialized as the bare digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NmapTiming {
    #[serde(rename = "0")]
    Paranoid,
    #[serde(rename = "1")]
    Sneaky,
    #[serde(rename = "2")]
    Polite,
    #[serde(rename = "3")]
    Normal,
    #[serde(rename = "4")]
    Aggressive,
    #[serde(rename = "5")]
    Insane,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NmapParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_type: Option<NmapScanType>,
    /// Passed through to nmap's `-p` unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<NmapTiming>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_type_names_match_enum() {
        for name in SCAN_TYPES {
            let parsed: NmapScanType = serde_json::from_value((*name).into()).unwrap();
            assert_eq!(serde_json::to_value(parsed).unwrap(), *name);
        }
    }

    #[test]
    fn timing_names_match_enum() {
        for name in TIMINGS {
            let parsed: NmapTiming = serde_json::from_value((*name).into()).unwrap();
            assert_eq!(serde_json::to_value(parsed).unwrap(), *name);
        }
    }

    #[test]
    fn timing_orders_by_aggressiveness() {
        assert!(NmapTiming::Paranoid < NmapTiming::Normal);
        assert!(NmapTiming::Normal < NmapTiming::Insane);
    }
}
