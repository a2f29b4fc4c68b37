//! Domain types and validation for the attack-surface dashboard.
//!
//! Everything in this crate is pure and does no I/O. The REST
//! client and the CLI build on these types.

pub mod error;
pub mod finding;
pub mod inventory;
pub mod project;
pub mod scan;
pub mod scan_config;
pub mod service;
pub mod target;
pub mod types;
pub mod validation;
