//! HTTP plumbing shared by every resource module.
//!
//! Wraps the backend's `/api/v1` surface using [`reqwest`]. Resource
//! modules add their endpoints as further `impl ApiClient` blocks.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Path prefix of every backend endpoint.
const API_PREFIX: &str = "/api/v1";

/// HTTP client for one backend instance and one bearer token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl ApiClient {
    /// Build a client with its own connection pool and request timeout.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(
            client,
            config.api_url.clone(),
            config.access_token.clone(),
        ))
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    ///
    /// * `base_url` - Backend origin, e.g. `http://host:8080`.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            access_token: access_token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- request helpers used by the resource modules ----

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self
            .execute(self.request(Method::GET, path), StatusCode::OK)
            .await?;
        Self::parse_response(response).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        expected: StatusCode,
    ) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(self.request(method, path).json(body), expected)
            .await?;
        Self::parse_response(response).await
    }

    /// Send a request without a body and discard the response body.
    pub(crate) async fn send_empty(
        &self,
        method: Method,
        path: &str,
        expected: StatusCode,
    ) -> ClientResult<()> {
        self.execute(self.request(method, path), expected).await?;
        Ok(())
    }

    // ---- private helpers ----

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "API request");
        self.client
            .request(method, format!("{}{API_PREFIX}{path}", self.base_url))
            .bearer_auth(&self.access_token)
    }

    /// Send the request and require exactly `expected`. Any other status,
    /// success or not, becomes a [`ClientError::Transport`] carrying the body.
    async fn execute(&self, request: RequestBuilder, expected: StatusCode) -> ClientResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status != expected {
            let url = response.url().to_string();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(
                status = status.as_u16(),
                expected = expected.as_u16(),
                url = %url,
                "Unexpected API response status"
            );
            return Err(ClientError::Transport {
                expected: expected.as_u16(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        Ok(response.json::<T>().await?)
    }
}
