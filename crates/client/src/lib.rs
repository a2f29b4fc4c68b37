//! Async REST client for the dashboard backend (`/api/v1`).
//!
//! Every call carries the bearer token and names exactly one expected HTTP
//! status; anything else is a [`ClientError::Transport`]. Request bodies
//! built from `surface_core` DTOs are validated before they are sent.

pub mod api;
pub mod config;
pub mod error;
pub mod findings;
pub mod inventory;
pub mod projects;
pub mod scan_configs;
pub mod scans;
pub mod targets;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
