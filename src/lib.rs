//! # Healthguard
//!
//! Health risk inference and symptom triage over pre-fitted model artifacts.
//!
//! This crate provides:
//! - Deterministic encoding of raw clinical fields into feature vectors
//! - Risk assessment through exported scaler and classifier artifacts
//! - Keyword-based symptom triage with session-scoped chat history
//! - BMI categorization with lifestyle advisories
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (schemas, encoding, risk, chat, BMI)
//! - `ports`: Trait definitions for scaling and classification
//! - `adapters`: Concrete implementations (linear models, artifact catalog)
//! - `application`: Use cases orchestrating domain and ports

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use application::{AssessmentService, TriageResponder};
pub use domain::{AssessmentInput, AssessmentKind, RiskAssessmentResult, RiskTier};

/// Result type for Healthguard operations
pub type Result<T> = std::result::Result<T, HealthguardError>;

/// Main error type for Healthguard
#[derive(Debug, thiserror::Error)]
pub enum HealthguardError {
    #[error("Invalid assessment input: {0}")]
    Validation(#[from] domain::ValidationError),

    #[error("Feature schema mismatch: {0}")]
    SchemaMismatch(#[from] ports::SchemaMismatchError),

    #[error("Inference failed: {0}")]
    Inference(#[from] ports::InferenceError),

    #[error("Artifact loading failed: {0}")]
    ArtifactLoad(#[from] adapters::ArtifactLoadError),
}
