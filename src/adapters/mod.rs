//! Adapters layer: Concrete implementations of ports.
//!
//! These modules contain the actual model-artifact integrations:
//! - `linear`: standard scaler + logistic regression over exported JSON
//! - `catalog`: startup loading of the four trained artifacts
//! - `sanitize`: PII filtering for logs

pub mod catalog;
pub mod linear;
pub mod sanitize;

// Re-export the startup error for lib.rs
pub use catalog::ArtifactLoadError;
