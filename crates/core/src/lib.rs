//! `acmon-core` -- telemetry domain types and the shared store.
//!
//! Pure domain logic with no I/O: the schema normalizer that turns raw
//! device payloads into canonical readings, the bounded history buffer,
//! and the lock-guarded [`TelemetryStore`] shared between the ingestion
//! task and dashboard readers.

pub mod error;
pub mod history;
pub mod normalize;
pub mod reading;
pub mod store;

pub use error::RejectReason;
pub use history::HistoryBuffer;
pub use normalize::normalize;
pub use reading::{Reading, SensorValues, Snapshot};
pub use store::{DedupPolicy, StoreConfig, TelemetryStore};
