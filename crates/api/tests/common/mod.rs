//! Shared fixtures for API integration tests.
//!
//! Mirrors the composition in `main.rs` (same router, same middleware
//! stack) but keeps handles to the store and sessions so tests can
//! seed readings and mint tokens directly.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use acmon_api::config::{sha256_hex, ServerConfig};
use acmon_api::router::build_app_router;
use acmon_api::sessions::SessionStore;
use acmon_api::state::AppState;
use acmon_classify::{Component, Orchestrator, ThresholdClassifier};
use acmon_core::store::DedupPolicy;
use acmon_core::{StoreConfig, TelemetryStore};

/// Stand-in fault bounds matching the production defaults.
const BEARINGS_NOISE_FAULT_DB: f64 = 85.0;
const RADIATOR_VALVE_TEMP_FAULT_C: f64 = 60.0;

/// Build a test `ServerConfig` with safe defaults and the stock
/// `admin` / `Admin123!` credentials.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        dashboard_user: "admin".to_string(),
        dashboard_password_sha256: sha256_hex("Admin123!"),
        max_rows: 100,
        dedup: DedupPolicy::AppendAll,
        monitor_extended: false,
    }
}

/// A fully wired test application plus handles into its shared state.
pub struct TestApp {
    pub app: Router,
    pub store: Arc<TelemetryStore>,
    pub sessions: Arc<SessionStore>,
}

/// Build the application router exactly as `main.rs` does, minus the
/// ingestion task (tests seed the store directly).
pub fn build_test_app() -> TestApp {
    let config = test_config();

    let store = Arc::new(TelemetryStore::new(StoreConfig {
        max_rows: config.max_rows,
        dedup: config.dedup,
    }));

    let orchestrator = Arc::new(
        Orchestrator::new()
            .with_component(
                Component::Bearings,
                Box::new(ThresholdClassifier::new(0, BEARINGS_NOISE_FAULT_DB)),
            )
            .with_component(
                Component::Radiator,
                Box::new(ThresholdClassifier::new(1, RADIATOR_VALVE_TEMP_FAULT_C)),
            ),
    );

    let sessions = Arc::new(SessionStore::new());

    let state = AppState {
        store: Arc::clone(&store),
        orchestrator,
        config: Arc::new(config.clone()),
        sessions: Arc::clone(&sessions),
    };

    TestApp {
        app: build_app_router(state, &config),
        store,
        sessions,
    }
}

/// Issue a GET request without credentials.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request must build"),
    )
    .await
    .expect("request must not fail")
}

/// Issue a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .expect("request must build"),
    )
    .await
    .expect("request must not fail")
}

/// Issue a POST request with a JSON body (no credentials).
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request must build"),
    )
    .await
    .expect("request must not fail")
}

/// Issue a POST request with a bearer token and empty body.
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .expect("request must build"),
    )
    .await
    .expect("request must not fail")
}

/// Issue a DELETE request with a bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .expect("request must build"),
    )
    .await
    .expect("request must not fail")
}

/// Collect a response body as parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body must be JSON")
}

/// Collect a response body as a UTF-8 string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body must be UTF-8")
}
