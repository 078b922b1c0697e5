//! `acmon-api` -- equipment-monitoring server.
//!
//! Composes the shared telemetry store, spawns the MQTT ingestion task,
//! wires the fault-classification orchestrator, and serves the
//! dashboard HTTP API. The store is constructed here and injected
//! everywhere by `Arc`; nothing reaches it through a global.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use acmon_classify::{Component, Orchestrator, ThresholdClassifier};
use acmon_core::{StoreConfig, TelemetryStore};
use acmon_ingest::IngestConfig;

use acmon_api::config::ServerConfig;
use acmon_api::router::build_app_router;
use acmon_api::sessions::SessionStore;
use acmon_api::state::AppState;

// Stand-in fault bounds used until a real model binding is configured
// per deployment. Feature order: [noise_db, valve_temp, water_flow].
const BEARINGS_NOISE_FAULT_DB: f64 = 85.0;
const RADIATOR_VALVE_TEMP_FAULT_C: f64 = 60.0;
const WATER_PUMP_VALVE_TEMP_FAULT_C: f64 = 55.0;
const EXHAUST_VALVE_NOISE_FAULT_DB: f64 = 90.0;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "acmon_api=debug,acmon_ingest=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, max_rows = config.max_rows, "Loaded server configuration");

    // --- Telemetry store ---
    let store = Arc::new(TelemetryStore::new(StoreConfig {
        max_rows: config.max_rows,
        dedup: config.dedup,
    }));

    // --- Ingestion task ---
    let ingest_config = IngestConfig::from_env();
    tracing::info!(
        broker = %ingest_config.broker_host,
        topic = %ingest_config.topic,
        "Starting MQTT ingestion task"
    );
    tokio::spawn(acmon_ingest::run(ingest_config, Arc::clone(&store)));

    // --- Classification ---
    let orchestrator = Arc::new(build_orchestrator(config.monitor_extended));
    tracing::info!(
        components = orchestrator.components().count(),
        "Classification orchestrator ready"
    );

    // --- App state ---
    let state = AppState {
        store,
        orchestrator,
        config: Arc::new(config.clone()),
        sessions: Arc::new(SessionStore::new()),
    };

    let app = build_app_router(state, &config);

    // --- Serve ---
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("HOST/PORT must form a valid socket address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!(%addr, "acmon API listening");

    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}

/// Wire one threshold capability per monitored component. Bearings and
/// radiator always; the extended set adds water pump and exhaust valve.
fn build_orchestrator(monitor_extended: bool) -> Orchestrator {
    let mut orchestrator = Orchestrator::new()
        .with_component(
            Component::Bearings,
            Box::new(ThresholdClassifier::new(0, BEARINGS_NOISE_FAULT_DB)),
        )
        .with_component(
            Component::Radiator,
            Box::new(ThresholdClassifier::new(1, RADIATOR_VALVE_TEMP_FAULT_C)),
        );

    if monitor_extended {
        orchestrator = orchestrator
            .with_component(
                Component::WaterPump,
                Box::new(ThresholdClassifier::new(1, WATER_PUMP_VALVE_TEMP_FAULT_C)),
            )
            .with_component(
                Component::ExhaustValve,
                Box::new(ThresholdClassifier::new(0, EXHAUST_VALVE_NOISE_FAULT_DB)),
            );
    }

    orchestrator
}
