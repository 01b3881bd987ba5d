//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the core use cases of the application.

mod assessment;
mod triage;

pub use assessment::AssessmentService;
pub use triage::{ConditionRule, SymptomKnowledgeBase, TriageResponder};
