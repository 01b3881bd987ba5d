//! Classifier port: Trait for pre-trained binary risk models.
//!
//! This trait abstracts the trained classifier artifact from the
//! application logic.

use serde::{Deserialize, Serialize};

use super::scaler::SchemaMismatchError;

/// Output of one classifier invocation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Prediction {
    /// The model's own binary decision (true = positive class)
    pub label: bool,

    /// Estimated probability of the positive class (0.0 to 1.0)
    pub probability: f64,
}

/// The underlying model invocation failed.
///
/// Classification is deterministic, so these are never retried; a failed
/// call is fatal to that request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("Classifier produced a non-finite probability")]
    NonFiniteProbability,

    #[error("Classifier produced probability {0} outside [0, 1]")]
    ProbabilityOutOfRange(f64),
}

/// Errors surfaced by [`Classifier::predict`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    #[error(transparent)]
    Schema(#[from] SchemaMismatchError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Trait for pre-trained binary classifiers.
///
/// Implementations report the probability the model produces for the
/// positive class and the model's own decision for it; the decision
/// boundary belongs to the artifact, not to callers, which must not
/// re-threshold the probability.
pub trait Classifier: Send + Sync {
    /// Dimensionality this classifier was trained for.
    fn dimensions(&self) -> usize;

    /// Run the model on an already-normalized feature vector.
    ///
    /// Deterministic given a fixed artifact and input.
    ///
    /// # Errors
    /// Returns [`ClassifyError::Schema`] if `features` has the wrong length
    /// and [`ClassifyError::Inference`] if the model produces an unusable
    /// probability.
    fn predict(&self, features: &[f64]) -> Result<Prediction, ClassifyError>;
}
