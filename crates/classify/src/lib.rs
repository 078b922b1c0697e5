//! `acmon-classify` -- per-component fault classification.
//!
//! The pretrained models themselves are an external capability behind
//! the [`Classifier`] trait; this crate owns the feature-vector
//! contract, the per-component orchestration, and the fault aggregation
//! consumed by the dashboard. Classification and ingestion are
//! independent failure domains: a failed evaluation cycle never touches
//! the store or the ingestion task.

pub mod error;
pub mod features;
pub mod orchestrator;
pub mod threshold;

pub use error::ClassifyError;
pub use features::{feature_vector, FEATURES_COMPACT, FEATURES_WITH_PLACEHOLDER};
pub use orchestrator::{
    Classifier, Component, ComponentReport, ComponentStatus, Evaluation, Orchestrator,
};
pub use threshold::ThresholdClassifier;
