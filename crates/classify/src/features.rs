//! Feature-vector construction.
//!
//! The feature order is a contract fixed by the external models:
//! `[noise_db, expansion_valve_outlet_temp, water_flow]`. The third
//! slot belonged to a retired water-flow sensor; models trained before
//! its removal still expect three features, so the slot is filled with
//! a zero placeholder. Newer two-feature models drop it.

use acmon_core::Snapshot;

use crate::error::ClassifyError;

/// Shape expected by legacy three-feature models (with the retired
/// water-flow placeholder).
pub const FEATURES_WITH_PLACEHOLDER: usize = 3;

/// Shape expected by retrained two-feature models.
pub const FEATURES_COMPACT: usize = 2;

/// Zero stand-in for the retired water-flow sensor.
const WATER_FLOW_PLACEHOLDER: f64 = 0.0;

/// Build the fixed-order feature vector for one capability from the
/// latest snapshot. `shape` must be exactly the feature count the
/// capability declared.
pub fn feature_vector(snapshot: &Snapshot, shape: usize) -> Result<Vec<f64>, ClassifyError> {
    let full = [
        snapshot.values.noise_db,
        snapshot.values.expansion_valve_outlet_temp,
        WATER_FLOW_PLACEHOLDER,
    ];
    match shape {
        FEATURES_COMPACT | FEATURES_WITH_PLACEHOLDER => Ok(full[..shape].to_vec()),
        requested => Err(ClassifyError::FeatureShape { requested }),
    }
}
