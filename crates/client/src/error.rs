use surface_core::error::CoreError;

/// Errors from the REST client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request was rejected locally before any network call.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The HTTP request itself failed (network, DNS, TLS, timeout, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a status other than the expected one.
    #[error("API returned HTTP {status}, expected {expected}: {body}")]
    Transport {
        expected: u16,
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// An update was attempted on a scan config that was never persisted.
    #[error("Scan config has no id; create it before updating")]
    MissingId,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
