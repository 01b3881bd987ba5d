//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no external dependencies.
//! All types are serializable and implement strict validation.

mod assessment;
mod bmi;
mod chat;
mod encode;
mod risk;

pub use assessment::{AssessmentKind, CategoricalMapping, FieldKind, FieldSpec};
pub use bmi::{bmi_report, BmiReport, BmiTier};
pub use chat::{ChatSession, ChatTurn, Speaker};
pub use encode::{encode, AssessmentInput, FeatureVector, FieldValue, ValidationError};
pub use risk::{RiskAssessmentResult, RiskTier};
