//! Per-component classification orchestration.

use acmon_core::Snapshot;
use serde::Serialize;

use crate::error::ClassifyError;
use crate::features::feature_vector;

/// A monitored compressor component.
///
/// Bearings and radiator are present in every deployment; water pump
/// and exhaust valve are monitored only where those models are
/// installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Bearings,
    Radiator,
    WaterPump,
    ExhaustValve,
}

impl Component {
    pub fn name(self) -> &'static str {
        match self {
            Component::Bearings => "bearings",
            Component::Radiator => "radiator",
            Component::WaterPump => "water_pump",
            Component::ExhaustValve => "exhaust_valve",
        }
    }
}

/// Binary health verdict for one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentStatus {
    Normal,
    Fault,
}

/// Externally supplied capability mapping a feature vector to a binary
/// fault indicator for one component.
///
/// Implementations declare the exact feature-vector shape they expect;
/// the orchestrator builds vectors to match.
pub trait Classifier: Send + Sync {
    /// Number of features this capability expects (2 or 3).
    fn expected_features(&self) -> usize;

    /// Classify one feature vector of exactly `expected_features` length.
    fn classify(&self, features: &[f64]) -> Result<ComponentStatus, ClassifyError>;
}

/// One component's verdict within an evaluation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentReport {
    pub component: Component,
    pub status: ComponentStatus,
}

/// Aggregated result of one evaluation cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub reports: Vec<ComponentReport>,
    /// Number of non-normal verdicts in this cycle.
    pub fault_count: usize,
    /// `true` iff `fault_count == 0`.
    pub all_normal: bool,
}

/// Invokes one classifier capability per monitored component and
/// aggregates the fault count.
pub struct Orchestrator {
    components: Vec<(Component, Box<dyn Classifier>)>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Register a capability for one monitored component. Registration
    /// order is the report order.
    pub fn with_component(
        mut self,
        component: Component,
        classifier: Box<dyn Classifier>,
    ) -> Self {
        self.components.push((component, classifier));
        self
    }

    /// Monitored components in registration order.
    pub fn components(&self) -> impl Iterator<Item = Component> + '_ {
        self.components.iter().map(|(component, _)| *component)
    }

    /// Run every registered capability against the snapshot.
    ///
    /// Fails the whole cycle if any capability fails or declares an
    /// unsupported feature shape; the caller surfaces that as a
    /// per-cycle error and retries on its next poll.
    pub fn evaluate(&self, snapshot: &Snapshot) -> Result<Evaluation, ClassifyError> {
        let mut reports = Vec::with_capacity(self.components.len());
        let mut fault_count = 0;

        for (component, classifier) in &self.components {
            let features = feature_vector(snapshot, classifier.expected_features())?;
            let status = classifier.classify(&features)?;
            if status == ComponentStatus::Fault {
                fault_count += 1;
            }
            reports.push(ComponentReport {
                component: *component,
                status,
            });
        }

        Ok(Evaluation {
            reports,
            fault_count,
            all_normal: fault_count == 0,
        })
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}
