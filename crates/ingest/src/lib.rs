//! `acmon-ingest` -- MQTT telemetry ingestion.
//!
//! Owns the subscription lifecycle for the single configured device
//! topic and turns raw messages into store writes. Runs as one
//! background task for the process lifetime, fully decoupled from
//! dashboard readers: the only shared touchpoint is the store's brief
//! critical section.

pub mod config;
pub mod service;

pub use config::IngestConfig;
pub use service::{handle_publish, run};
