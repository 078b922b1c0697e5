//! Schema normalization: raw device payload -> canonical sensor values.
//!
//! Devices in the field run several firmware generations with slightly
//! different JSON schemas. Normalization is deliberately permissive:
//! a malformed single field coerces to its default rather than dropping
//! the whole message. Only structurally unusable payloads (not a JSON
//! object, or no recognized key at all) are rejected.

use serde_json::{Map, Value};

use crate::error::RejectReason;
use crate::reading::SensorValues;

/// The canonical sensor keys a payload may carry.
pub const CANONICAL_KEYS: [&str; 8] = [
    "noise_db",
    "expansion_valve_outlet_temp",
    "condenser_inlet_temp",
    "ambient_temp",
    "humidity",
    "voltage",
    "current_ma",
    "power_mw",
];

/// Pre-rename firmware sends `water_outlet_temp` in place of
/// `expansion_valve_outlet_temp`.
pub const LEGACY_EXPANSION_VALVE_KEY: &str = "water_outlet_temp";

/// Normalize a raw payload into canonical sensor values.
///
/// - Not a JSON object => [`RejectReason::MalformedPayload`].
/// - No recognized key (canonical or legacy alias) present =>
///   [`RejectReason::EmptyPayload`].
/// - Otherwise every field is extracted with a fallback chain:
///   canonical key -> legacy alias (expansion-valve pair only) -> `0.0`.
///
/// Sequence number and timestamp are assigned later by the store.
pub fn normalize(raw: &[u8]) -> Result<SensorValues, RejectReason> {
    let value: Value =
        serde_json::from_slice(raw).map_err(|_| RejectReason::MalformedPayload)?;
    let map = value.as_object().ok_or(RejectReason::MalformedPayload)?;

    let recognized = CANONICAL_KEYS.iter().any(|key| map.contains_key(*key))
        || map.contains_key(LEGACY_EXPANSION_VALVE_KEY);
    if !recognized {
        return Err(RejectReason::EmptyPayload);
    }

    Ok(SensorValues {
        noise_db: field(map, "noise_db"),
        expansion_valve_outlet_temp: expansion_valve_field(map),
        condenser_inlet_temp: field(map, "condenser_inlet_temp"),
        ambient_temp: field(map, "ambient_temp"),
        humidity: field(map, "humidity"),
        voltage: field(map, "voltage"),
        current_ma: field(map, "current_ma"),
        power_mw: field(map, "power_mw"),
    })
}

/// Extract one field, coercing to `0.0` on absence or type mismatch.
fn field(map: &Map<String, Value>, key: &str) -> f64 {
    map.get(key).and_then(coerce_f64).unwrap_or(0.0)
}

/// The expansion-valve field honors the legacy alias. The canonical key
/// wins whenever it is present, even with an unparseable value.
fn expansion_valve_field(map: &Map<String, Value>) -> f64 {
    if map.contains_key("expansion_valve_outlet_temp") {
        field(map, "expansion_valve_outlet_temp")
    } else {
        field(map, LEGACY_EXPANSION_VALVE_KEY)
    }
}

/// Coerce a JSON value to `f64`: numbers directly, strings via parse.
/// Anything else (null, bool, array, object, `"NaN"`-like junk) is a
/// type mismatch and falls back to the field default.
fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}
