/// Failures surfaced by a classification cycle.
///
/// Always isolated to the evaluation that raised it: the display layer
/// shows a per-cycle error and the next poll retries from scratch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// A capability declared a feature-vector shape this system cannot
    /// build.
    #[error("unsupported feature vector shape: {requested} features requested, supported shapes are 2 or 3")]
    FeatureShape { requested: usize },

    /// A classifier capability failed for one component.
    #[error("classifier for component '{component}' failed: {message}")]
    Capability {
        component: &'static str,
        message: String,
    },
}
