//! Risk assessment result types.
//!
//! Represents the output of one classifier invocation, interpreted into a
//! tier and a fixed advisory message.

use serde::{Deserialize, Serialize};

use super::assessment::AssessmentKind;

/// Binary risk tier derived from the classifier's own decision output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    /// Risk absent per the model's decision
    Low,
    /// Risk present per the model's decision
    High,
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Result of one risk assessment.
///
/// Not persisted; produced per invocation and handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessmentResult {
    /// Assessment this result belongs to
    pub kind: AssessmentKind,

    /// The model's binary decision (true = risk present)
    pub is_high_risk: bool,

    /// Estimated probability of the positive class (0.0 to 1.0)
    pub probability: f64,

    /// Fixed per-kind, per-tier guidance with the probability interpolated
    pub advisory_text: String,
}

impl RiskAssessmentResult {
    /// Build a result from the classifier's decision and probability.
    ///
    /// The decision comes from the model itself; this constructor never
    /// re-thresholds the probability.
    #[must_use]
    pub fn new(kind: AssessmentKind, is_high_risk: bool, probability: f64) -> Self {
        let advisory_text = advisory_for(kind, is_high_risk, probability);
        Self {
            kind,
            is_high_risk,
            probability,
            advisory_text,
        }
    }

    /// The risk tier implied by the model's decision.
    #[must_use]
    pub fn tier(&self) -> RiskTier {
        if self.is_high_risk {
            RiskTier::High
        } else {
            RiskTier::Low
        }
    }
}

/// Advisory table, one message per kind and tier. The probability is shown
/// as a percentage with one decimal place.
fn advisory_for(kind: AssessmentKind, is_high_risk: bool, probability: f64) -> String {
    let pct = probability * 100.0;
    match (kind, is_high_risk) {
        (AssessmentKind::Diabetes, true) => format!(
            "High risk of diabetes ({pct:.1}%). Consider consulting a doctor and making lifestyle changes."
        ),
        (AssessmentKind::Diabetes, false) => format!(
            "Low risk of diabetes ({pct:.1}%). Maintain healthy habits to keep your risk low."
        ),
        (AssessmentKind::HeartDisease, true) => format!(
            "High risk of heart disease ({pct:.1}%). Please consult a cardiologist for further evaluation."
        ),
        (AssessmentKind::HeartDisease, false) => format!(
            "Low risk of heart disease ({pct:.1}%). Continue maintaining heart-healthy habits."
        ),
    }
}
