//! Canonical telemetry sample types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Second-resolution timestamp shown in the dashboard status line.
pub const STATUS_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Microsecond-resolution timestamp used for history rows and CSV export.
pub const HISTORY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// The eight numeric sensor fields of one normalized sample.
///
/// Every field defaults to `0.0` when absent or unparseable in the raw
/// payload -- a single bad field never discards an otherwise useful
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SensorValues {
    pub noise_db: f64,
    pub expansion_valve_outlet_temp: f64,
    pub condenser_inlet_temp: f64,
    pub ambient_temp: f64,
    pub humidity: f64,
    pub voltage: f64,
    pub current_ma: f64,
    pub power_mw: f64,
}

/// One accepted telemetry sample.
///
/// Immutable once constructed. `sequence_number` and `received_at` are
/// assigned by the store on acceptance, not by the normalizer, so
/// normalization stays a pure function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    /// Store-local monotonic counter, starting at 1.
    pub sequence_number: u64,
    /// Stamped at acceptance time. Non-decreasing across accepted
    /// readings within a process.
    pub received_at: DateTime<Utc>,
    #[serde(flatten)]
    pub values: SensorValues,
}

impl Reading {
    /// Microsecond-resolution timestamp string for history rows.
    pub fn history_timestamp(&self) -> String {
        self.received_at.format(HISTORY_TIMESTAMP_FORMAT).to_string()
    }
}

/// The most recently accepted reading's values plus cumulative counters,
/// copied out of the store at one consistent instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    #[serde(flatten)]
    pub values: SensorValues,
    /// Second-resolution timestamp of the last accepted message, or
    /// `"Waiting..."` before the first one.
    pub last_update: String,
    /// Accepted messages since process start. Unaffected by history
    /// eviction.
    pub message_count: u64,
    /// Sequence number of the last accepted reading (0 if none yet).
    pub last_sequence: u64,
    /// History buffer length at the instant of the call.
    pub history_len: usize,
}
