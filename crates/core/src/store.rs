//! Shared telemetry store.
//!
//! One mutual-exclusion lock guards the current snapshot, the history
//! buffer, and the counters as a single compound unit. Every operation
//! is one short critical section -- lock, mutate or copy, unlock -- and
//! the lock is never exposed to callers and never held across I/O.
//!
//! The store is constructed once at process composition and injected by
//! `Arc` into the ingestion task (writer) and the HTTP handlers
//! (readers). There is no ambient/static instance.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use crate::history::HistoryBuffer;
use crate::reading::{Reading, SensorValues, Snapshot, STATUS_TIMESTAMP_FORMAT};

/// History capacity for the small-footprint deployment.
pub const DEFAULT_MAX_ROWS: usize = 5000;

/// History capacity for the long-retention deployment.
pub const LONG_RETENTION_MAX_ROWS: usize = 10000;

/// Placeholder status shown before the first message arrives.
pub const WAITING_STATUS: &str = "Waiting...";

/// What to do with a reading whose second-resolution timestamp matches
/// the previous accepted reading's.
///
/// Early firmware emitted at most one sample per second and the
/// dashboard coalesced duplicates; current firmware timestamps at
/// microsecond resolution and every accepted reading is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupPolicy {
    /// Append every accepted reading (the default).
    #[default]
    AppendAll,
    /// Skip the history append when the second-resolution timestamp
    /// matches the previous reading. The snapshot and counters are
    /// still updated.
    CoalesceSeconds,
}

/// Deployment-time store parameters.
#[derive(Debug, Clone, Copy)]
pub struct StoreConfig {
    /// History buffer capacity.
    pub max_rows: usize,
    /// Same-second dedup policy for history appends.
    pub dedup: DedupPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            dedup: DedupPolicy::AppendAll,
        }
    }
}

/// Compound state guarded by the single store lock.
#[derive(Debug)]
struct StoreState {
    values: SensorValues,
    last_update: String,
    message_count: u64,
    next_sequence: u64,
    history: HistoryBuffer,
}

/// Thread-safe owner of the current snapshot, the bounded history, and
/// the acceptance counters.
#[derive(Debug)]
pub struct TelemetryStore {
    dedup: DedupPolicy,
    state: Mutex<StoreState>,
}

impl TelemetryStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            dedup: config.dedup,
            state: Mutex::new(StoreState {
                values: SensorValues::default(),
                last_update: WAITING_STATUS.to_string(),
                message_count: 0,
                next_sequence: 1,
                history: HistoryBuffer::new(config.max_rows),
            }),
        }
    }

    /// Store with the given history capacity and default dedup policy.
    pub fn with_capacity(max_rows: usize) -> Self {
        Self::new(StoreConfig {
            max_rows,
            ..StoreConfig::default()
        })
    }

    /// Record an accepted reading: assign the next sequence number,
    /// stamp the arrival time, overwrite the current snapshot, bump
    /// `message_count`, and append to history (which may silently evict
    /// the oldest reading). Returns the assigned sequence number.
    pub fn record(&self, values: SensorValues) -> u64 {
        self.record_at(values, Utc::now())
    }

    /// `record` with an explicit arrival timestamp. Exposed for
    /// deterministic dedup-policy tests; production ingestion always
    /// stamps `Utc::now()` via [`record`](Self::record).
    pub fn record_at(&self, values: SensorValues, received_at: DateTime<Utc>) -> u64 {
        let mut state = self.lock();

        let sequence_number = state.next_sequence;
        state.next_sequence += 1;
        state.message_count += 1;
        state.values = values;
        state.last_update = received_at.format(STATUS_TIMESTAMP_FORMAT).to_string();

        let coalesce = self.dedup == DedupPolicy::CoalesceSeconds
            && state
                .history
                .latest()
                .is_some_and(|prev| prev.received_at.timestamp() == received_at.timestamp());
        if !coalesce {
            state.history.append(Reading {
                sequence_number,
                received_at,
                values,
            });
        }

        sequence_number
    }

    /// Copy of the current snapshot plus the history length at the
    /// instant of the call.
    pub fn current(&self) -> Snapshot {
        let state = self.lock();
        Snapshot {
            values: state.values,
            last_update: state.last_update.clone(),
            message_count: state.message_count,
            last_sequence: state.next_sequence - 1,
            history_len: state.history.len(),
        }
    }

    /// Copy of the history buffer, oldest first.
    pub fn history(&self) -> Vec<Reading> {
        self.lock().history.snapshot()
    }

    /// Empty the history buffer. The current snapshot keeps the
    /// device's last reading, and `message_count` / the sequence
    /// counter are lifetime totals that are NOT reset here.
    pub fn clear_history(&self) {
        self.lock().history.clear();
    }

    /// All mutation is infallible once the lock is held, so a poisoned
    /// lock still guards consistent state; recover the guard.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
