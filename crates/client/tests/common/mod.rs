//! In-process stub backend for client integration tests.
//!
//! Each test spins up an axum server on an ephemeral port and points an
//! [`ApiClient`] at it. Every request the stub receives is recorded so tests
//! can assert on method, path, bearer token and body.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::{Json, Router};
use serde_json::Value;

use surface_client::ApiClient;

pub const TEST_TOKEN: &str = "test-token";

/// One request as seen by the stub.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

pub type RequestLog = Arc<Mutex<Vec<Recorded>>>;

/// Serve `app` on `127.0.0.1:0` and return its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn client_for(base_url: &str) -> ApiClient {
    ApiClient::with_client(reqwest::Client::new(), base_url, TEST_TOKEN)
}

/// Record the request into `log`.
pub fn record(log: &RequestLog, method: Method, uri: &Uri, headers: &HeaderMap, body: &Bytes) {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(body).ok()
    };
    log.lock().unwrap().push(Recorded {
        method,
        path: uri.path().to_string(),
        authorization,
        body,
    });
}

/// A backend that answers every request with `status` and `body`.
pub async fn canned(status: StatusCode, body: Value) -> (ApiClient, RequestLog) {
    let log = RequestLog::default();
    let handler_log = Arc::clone(&log);
    let app = Router::new().fallback(
        move |method: Method, uri: Uri, headers: HeaderMap, bytes: Bytes| {
            let log = Arc::clone(&handler_log);
            let body = body.clone();
            async move {
                record(&log, method, &uri, &headers, &bytes);
                (status, Json(body))
            }
        },
    );
    let base_url = spawn(app).await;
    (client_for(&base_url), log)
}

/// A base URL with nothing listening behind it.
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn requests(log: &RequestLog) -> Vec<Recorded> {
    log.lock().unwrap().clone()
}
