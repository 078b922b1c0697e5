use std::sync::Arc;

use acmon_classify::Orchestrator;
use acmon_core::TelemetryStore;

use crate::config::ServerConfig;
use crate::sessions::SessionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The shared telemetry store. Written by the ingestion task,
    /// read by handlers.
    pub store: Arc<TelemetryStore>,
    /// Per-component fault classification.
    pub orchestrator: Arc<Orchestrator>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Live dashboard sessions.
    pub sessions: Arc<SessionStore>,
}
