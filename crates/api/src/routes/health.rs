use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Telemetry messages accepted since process start.
    pub messages_accepted: u64,
    /// Second-resolution timestamp of the last accepted message.
    pub last_update: String,
}

/// GET /health -- service liveness plus a coarse ingestion signal.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let snapshot = state.store.current();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        messages_accepted: snapshot.message_count,
        last_update: snapshot.last_update,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
