use crate::error::ClientError;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL without the `/api/v1` suffix.
    pub api_url: String,
    /// Bearer token issued by the external auth provider.
    pub access_token: String,
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `API_URL`              | `http://localhost:8080` |
    /// | `ACCESS_TOKEN`         | required                |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let api_url = lookup("API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.into())
            .trim_end_matches('/')
            .to_string();

        let access_token = lookup("ACCESS_TOKEN")
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientError::Config("ACCESS_TOKEN must be set".into()))?;

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| {
                ClientError::Config(format!("REQUEST_TIMEOUT_SECS must be a valid u64, got {raw}"))
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            access_token,
            request_timeout_secs,
        })
    }
}
