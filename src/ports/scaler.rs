//! Scaler port: Trait for pre-fitted feature normalization.
//!
//! This trait abstracts the trained normalization artifact from the
//! application logic.

/// Vector dimensionality disagrees with a trained artifact.
///
/// Signals encoder/schema drift, a programming error rather than a user
/// error; it must surface loudly instead of being coerced away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Schema mismatch: expected {expected} features, got {got}")]
pub struct SchemaMismatchError {
    /// Dimensionality the artifact was trained with
    pub expected: usize,
    /// Dimensionality actually supplied
    pub got: usize,
}

/// Trait for pre-fitted scaling transforms.
///
/// Implementations apply statistics captured at training time; they never
/// re-fit, and they are deterministic and side-effect free, so a loaded
/// scaler can be shared read-only across concurrent requests.
pub trait Scaler: Send + Sync {
    /// Dimensionality this scaler was fitted for.
    fn dimensions(&self) -> usize;

    /// Apply the pre-fitted per-feature transform to `features`.
    ///
    /// # Errors
    /// Returns [`SchemaMismatchError`] if `features` has the wrong length.
    /// The input is never truncated or padded to fit.
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, SchemaMismatchError>;
}
