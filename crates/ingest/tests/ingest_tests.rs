//! Integration tests for the message-to-store pipeline.
//!
//! Exercise [`handle_publish`] directly with raw payload bytes -- no
//! broker needed. The rejection-purity property matters most here:
//! a dropped payload must have no observable effect on the store.

use acmon_ingest::handle_publish;

use acmon_core::store::WAITING_STATUS;
use acmon_core::{RejectReason, StoreConfig, TelemetryStore};
use assert_matches::assert_matches;

// ---------------------------------------------------------------------------
// Test: accepted payloads update the store
// ---------------------------------------------------------------------------

#[test]
fn accepted_payload_records_and_returns_sequence() {
    let store = TelemetryStore::new(StoreConfig::default());

    let seq = handle_publish(
        &store,
        br#"{"noise_db": 42.0, "expansion_valve_outlet_temp": 18.5}"#,
    )
    .expect("valid payload must record");

    assert_eq!(seq, 1);
    let snap = store.current();
    assert_eq!(snap.values.noise_db, 42.0);
    assert_eq!(snap.values.expansion_valve_outlet_temp, 18.5);
    assert_eq!(snap.message_count, 1);
    assert_eq!(store.history().len(), 1);
}

#[test]
fn sequence_numbers_increase_per_accepted_message() {
    let store = TelemetryStore::new(StoreConfig::default());
    for expected in 1..=5u64 {
        let seq = handle_publish(&store, br#"{"humidity": 50.0}"#).unwrap();
        assert_eq!(seq, expected);
    }
}

// ---------------------------------------------------------------------------
// Test: rejection purity
// ---------------------------------------------------------------------------

/// A heartbeat/empty frame leaves `current()` and `history()` exactly
/// as they were and does not increment `message_count`.
#[test]
fn empty_payload_has_no_observable_effect() {
    let store = TelemetryStore::new(StoreConfig::default());
    handle_publish(&store, br#"{"noise_db": 40.0}"#).unwrap();

    let snap_before = store.current();
    let history_before = store.history();

    assert_matches!(
        handle_publish(&store, br#"{"status": "alive"}"#),
        Err(RejectReason::EmptyPayload)
    );

    assert_eq!(store.current(), snap_before);
    assert_eq!(store.history(), history_before);
}

#[test]
fn malformed_payload_has_no_observable_effect() {
    let store = TelemetryStore::new(StoreConfig::default());

    assert_matches!(
        handle_publish(&store, b"\xff\xfe not json"),
        Err(RejectReason::MalformedPayload)
    );

    let snap = store.current();
    assert_eq!(snap.message_count, 0);
    assert_eq!(snap.last_update, WAITING_STATUS);
    assert!(store.history().is_empty());
}

// ---------------------------------------------------------------------------
// Test: firmware-schema tolerance on the live path
// ---------------------------------------------------------------------------

#[test]
fn legacy_alias_payload_is_accepted() {
    let store = TelemetryStore::new(StoreConfig::default());
    handle_publish(&store, br#"{"water_outlet_temp": 17.25}"#).unwrap();
    assert_eq!(store.current().values.expansion_valve_outlet_temp, 17.25);
}

#[test]
fn partially_garbled_payload_still_records() {
    let store = TelemetryStore::new(StoreConfig::default());
    handle_publish(&store, br#"{"noise_db": "??", "humidity": 61.0}"#).unwrap();

    let snap = store.current();
    assert_eq!(snap.values.noise_db, 0.0);
    assert_eq!(snap.values.humidity, 61.0);
    assert_eq!(snap.message_count, 1);
}
