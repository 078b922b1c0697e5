//! Threshold-based classifier capability.
//!
//! Stand-in used when no pretrained model is wired into a deployment:
//! a component is reported faulty when one designated feature exceeds a
//! fixed bound. Lives behind the same [`Classifier`] trait as real
//! model bindings so swapping one in touches nothing else.

use crate::error::ClassifyError;
use crate::features::FEATURES_WITH_PLACEHOLDER;
use crate::orchestrator::{Classifier, ComponentStatus};

/// Reports `Fault` when `features[feature_index] > fault_above`.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdClassifier {
    feature_index: usize,
    fault_above: f64,
    expected_features: usize,
}

impl ThresholdClassifier {
    /// Three-feature (legacy-shape) threshold capability watching one
    /// feature index.
    pub fn new(feature_index: usize, fault_above: f64) -> Self {
        Self {
            feature_index,
            fault_above,
            expected_features: FEATURES_WITH_PLACEHOLDER,
        }
    }

    /// Override the declared feature-vector shape.
    pub fn with_expected_features(mut self, expected_features: usize) -> Self {
        self.expected_features = expected_features;
        self
    }
}

impl Classifier for ThresholdClassifier {
    fn expected_features(&self) -> usize {
        self.expected_features
    }

    fn classify(&self, features: &[f64]) -> Result<ComponentStatus, ClassifyError> {
        let value = features.get(self.feature_index).copied().ok_or_else(|| {
            ClassifyError::Capability {
                component: "threshold",
                message: format!(
                    "feature index {} out of range for {}-feature vector",
                    self.feature_index,
                    features.len()
                ),
            }
        })?;

        if value > self.fault_above {
            Ok(ComponentStatus::Fault)
        } else {
            Ok(ComponentStatus::Normal)
        }
    }
}
