//! Ports layer: Trait definitions for the trained-artifact boundary.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the application and the pre-fitted model artifacts.

mod classifier;
mod scaler;

pub use classifier::{Classifier, ClassifyError, InferenceError, Prediction};
pub use scaler::{Scaler, SchemaMismatchError};
