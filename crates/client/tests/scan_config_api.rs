//! Integration tests for the `/scan-configs` client calls.
//!
//! Runs the client against an in-process axum stub, checking the exact wire
//! body, the bearer token, the expected-status policy, and that invalid
//! configurations are stopped before any request is made.

mod common;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use uuid::Uuid;

use common::{canned, client_for, dead_base_url, requests, spawn};
use surface_client::ClientError;
use surface_core::error::CoreError;
use surface_core::scan_config::{NmapParams, NmapTiming, ScanConfigCandidate, ScanParameters};

fn nmap_candidate() -> ScanConfigCandidate {
    ScanConfigCandidate {
        id: None,
        name: "quick scan".to_string(),
        scanner_type: "nmap".to_string(),
        active: true,
        parameters: json!({"scan_type": "quick", "timing": "3"}),
    }
}

fn persisted(id: Uuid) -> Value {
    json!({
        "id": id,
        "name": "quick scan",
        "scanner_type": "nmap",
        "parameters": {"scan_type": "quick", "timing": "3"},
        "active": true,
        "created_at": "2024-05-01T12:00:00Z",
    })
}

// ---------------------------------------------------------------------------
// Test: POST sends the exact body with the bearer token
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_sends_body_and_token() {
    let id = Uuid::new_v4();
    let (client, log) = canned(StatusCode::CREATED, persisted(id)).await;

    let config = nmap_candidate().validate().unwrap();
    let record = client.create_scan_config(&config).await.unwrap();
    assert_eq!(record.id, id);
    assert!(record.created_at.is_some());

    let seen = requests(&log);
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, Method::POST);
    assert_eq!(seen[0].path, "/api/v1/scan-configs");
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer test-token"));
    assert_eq!(
        seen[0].body,
        Some(json!({
            "name": "quick scan",
            "scanner_type": "nmap",
            "parameters": {"scan_type": "quick", "timing": "3"},
            "active": true,
        }))
    );
}

// ---------------------------------------------------------------------------
// Test: any status other than the expected one is a transport error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_requires_exactly_201() {
    let (client, _log) = canned(StatusCode::OK, persisted(Uuid::new_v4())).await;
    let config = nmap_candidate().validate().unwrap();

    let err = client.create_scan_config(&config).await.unwrap_err();
    assert_matches!(
        err,
        ClientError::Transport {
            expected: 201,
            status: 200,
            ..
        }
    );
}

#[tokio::test]
async fn transport_error_keeps_response_body() {
    let (client, _log) = canned(
        StatusCode::BAD_REQUEST,
        json!({"error": "scanner_type is required"}),
    )
    .await;
    let config = nmap_candidate().validate().unwrap();

    let err = client.create_scan_config(&config).await.unwrap_err();
    assert_matches!(
        err,
        ClientError::Transport { status: 400, ref body, .. } if body.contains("scanner_type is required")
    );
}

#[tokio::test]
async fn unreachable_backend_is_a_request_error() {
    let client = client_for(&dead_base_url().await);
    let err = client.list_scan_configs().await.unwrap_err();
    assert_matches!(err, ClientError::Request(_));
}

// ---------------------------------------------------------------------------
// Test: validation happens before the network
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_candidate_never_reaches_backend() {
    let (client, log) = canned(StatusCode::CREATED, json!({})).await;
    let candidate = ScanConfigCandidate {
        id: None,
        name: "bad".to_string(),
        scanner_type: "httpx".to_string(),
        active: true,
        parameters: json!({"timeout": "30"}),
    };

    let err = client.submit_scan_config(&candidate).await.unwrap_err();
    assert_matches!(
        err,
        ClientError::Core(CoreError::SchemaViolation(ref errors))
            if errors.for_field("parameters.timeout").is_some()
    );
    assert!(requests(&log).is_empty());
}

#[tokio::test]
async fn unknown_scanner_type_never_reaches_backend() {
    let (client, log) = canned(StatusCode::CREATED, json!({})).await;
    let candidate = ScanConfigCandidate {
        scanner_type: "masscan".to_string(),
        ..nmap_candidate()
    };

    let err = client.submit_scan_config(&candidate).await.unwrap_err();
    assert_matches!(err, ClientError::Core(CoreError::UnknownScannerType(_)));
    assert!(requests(&log).is_empty());
}

#[tokio::test]
async fn update_without_id_fails_locally() {
    let (client, log) = canned(StatusCode::OK, json!({})).await;
    let config = nmap_candidate().validate().unwrap();

    let err = client.update_scan_config(&config).await.unwrap_err();
    assert_matches!(err, ClientError::MissingId);
    assert!(requests(&log).is_empty());
}

#[tokio::test]
async fn hand_edited_config_never_reaches_backend() {
    let (client, log) = canned(StatusCode::CREATED, json!({})).await;
    let mut config = nmap_candidate().validate().unwrap();
    config.name = String::new();

    let err = client.create_scan_config(&config).await.unwrap_err();
    assert_matches!(err, ClientError::Core(CoreError::SchemaViolation(_)));

    config.id = Some(Uuid::new_v4());
    let err = client.update_scan_config(&config).await.unwrap_err();
    assert_matches!(err, ClientError::Core(CoreError::SchemaViolation(_)));
    assert!(requests(&log).is_empty());
}

#[tokio::test]
async fn submit_with_id_issues_put() {
    let id = Uuid::new_v4();
    let (client, log) = canned(StatusCode::OK, persisted(id)).await;

    client
        .submit_scan_config(&nmap_candidate().with_id(id))
        .await
        .unwrap();

    let seen = requests(&log);
    assert_eq!(seen[0].method, Method::PUT);
    assert_eq!(seen[0].path, format!("/api/v1/scan-configs/{id}"));
    let body = seen[0].body.as_ref().unwrap();
    assert!(body.get("id").is_none(), "id travels in the path only");
}

// ---------------------------------------------------------------------------
// Test: full lifecycle against a stateful stub
// ---------------------------------------------------------------------------

type Store = Arc<Mutex<HashMap<Uuid, Value>>>;

fn scan_config_backend(store: Store) -> Router {
    Router::new()
        .route("/api/v1/scan-configs", get(list_configs).post(create_config))
        .route(
            "/api/v1/scan-configs/{id}",
            get(fetch_config).put(update_config).delete(delete_config),
        )
        .with_state(store)
}

async fn list_configs(State(store): State<Store>) -> Json<Value> {
    let store = store.lock().unwrap();
    Json(Value::Array(store.values().cloned().collect()))
}

async fn create_config(
    State(store): State<Store>,
    Json(mut body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let id = Uuid::new_v4();
    body["id"] = json!(id);
    store.lock().unwrap().insert(id, body.clone());
    (StatusCode::CREATED, Json(body))
}

async fn fetch_config(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, StatusCode> {
    let store = store.lock().unwrap();
    store.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_config(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut store = store.lock().unwrap();
    if !store.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    body["id"] = json!(id);
    store.insert(id, body.clone());
    Ok(Json(body))
}

async fn delete_config(State(store): State<Store>, Path(id): Path<Uuid>) -> Json<Value> {
    store.lock().unwrap().remove(&id);
    Json(json!({"message": "Scan configuration deleted successfully"}))
}

#[tokio::test]
async fn create_edit_delete_lifecycle() {
    let store = Store::default();
    let client = client_for(&spawn(scan_config_backend(Arc::clone(&store))).await);

    // Create.
    let created = client.submit_scan_config(&nmap_candidate()).await.unwrap();
    let listed = client.list_scan_configs().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);

    // Edit: re-validate the persisted record, change it, resubmit.
    let mut config = listed[0].validate().unwrap();
    assert_eq!(config.id, Some(created.id));
    config.parameters = ScanParameters::Nmap(NmapParams {
        timing: Some(NmapTiming::Aggressive),
        ..NmapParams::default()
    });
    config.active = false;
    client.update_scan_config(&config).await.unwrap();

    let fetched = client.get_scan_config(created.id).await.unwrap();
    assert!(!fetched.active);
    assert_eq!(fetched.parameters, json!({"timing": "4"}));
    assert_eq!(fetched.validate().unwrap(), config);

    // Delete.
    client.delete_scan_config(created.id).await.unwrap();
    assert!(client.list_scan_configs().await.unwrap().is_empty());

    let err = client.get_scan_config(created.id).await.unwrap_err();
    assert_matches!(err, ClientError::Transport { status: 404, .. });
}
