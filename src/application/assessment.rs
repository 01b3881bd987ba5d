//! Assessment service: Orchestrates risk inference.
//!
//! This service sequences:
//! - Feature encoding
//! - Pre-fitted scaling
//! - Classifier invocation
//! - Tier and advisory selection

use std::path::Path;

use crate::adapters::catalog::ArtifactCatalog;
use crate::adapters::linear::{LogisticClassifier, StandardScaler};
use crate::domain::{encode, AssessmentInput, AssessmentKind, RiskAssessmentResult};
use crate::ports::{Classifier, ClassifyError, Scaler};
use crate::HealthguardError;

/// Service for running risk assessments over the trained artifacts.
///
/// Holds one scaler/classifier pair per assessment kind, immutable after
/// construction. Every call is a bounded, synchronous computation with no
/// interior mutability, so a single instance can serve concurrent requests
/// behind an `Arc` without locking.
///
/// # Logging
///
/// Raw clinical field values never reach logging calls; only step progress
/// and the derived tier/probability are logged.
pub struct AssessmentService<S, C>
where
    S: Scaler,
    C: Classifier,
{
    diabetes_scaler: S,
    diabetes_classifier: C,
    heart_scaler: S,
    heart_classifier: C,
}

impl AssessmentService<StandardScaler, LogisticClassifier> {
    /// Load the four trained artifacts from `model_dir` and build the
    /// service over them.
    ///
    /// # Errors
    /// Returns error if any artifact fails to load or disagrees with its
    /// schema; the caller must treat this as fatal at startup.
    pub fn load(model_dir: &Path) -> Result<Self, HealthguardError> {
        let catalog = ArtifactCatalog::load(model_dir)?;
        Self::new(
            catalog.diabetes_scaler,
            catalog.diabetes_classifier,
            catalog.heart_scaler,
            catalog.heart_classifier,
        )
    }
}

impl<S, C> AssessmentService<S, C>
where
    S: Scaler,
    C: Classifier,
{
    /// Create a service over already-loaded artifacts.
    ///
    /// # Errors
    /// Returns a schema mismatch if any artifact's dimensionality disagrees
    /// with its assessment schema; a service is never built over drifted
    /// artifacts.
    pub fn new(
        diabetes_scaler: S,
        diabetes_classifier: C,
        heart_scaler: S,
        heart_classifier: C,
    ) -> Result<Self, HealthguardError> {
        let service = Self {
            diabetes_scaler,
            diabetes_classifier,
            heart_scaler,
            heart_classifier,
        };

        for kind in [AssessmentKind::Diabetes, AssessmentKind::HeartDisease] {
            let expected = kind.schema().len();
            let (scaler, classifier) = service.artifacts_for(kind);
            for got in [scaler.dimensions(), classifier.dimensions()] {
                if got != expected {
                    return Err(HealthguardError::SchemaMismatch(
                        crate::ports::SchemaMismatchError { expected, got },
                    ));
                }
            }
        }

        tracing::info!("Initialized assessment service");
        Ok(service)
    }

    fn artifacts_for(&self, kind: AssessmentKind) -> (&S, &C) {
        match kind {
            AssessmentKind::Diabetes => (&self.diabetes_scaler, &self.diabetes_classifier),
            AssessmentKind::HeartDisease => (&self.heart_scaler, &self.heart_classifier),
        }
    }

    /// Run one risk assessment.
    ///
    /// Performs the full pipeline:
    /// 1. Encode raw fields into the fixed-order vector
    /// 2. Apply the pre-fitted scaling transform
    /// 3. Run the classifier
    /// 4. Map decision and probability to a tier and advisory
    ///
    /// # Errors
    /// Returns error if any step fails; failures propagate unchanged with
    /// no retry or recovery.
    pub fn assess(
        &self,
        kind: AssessmentKind,
        input: &AssessmentInput,
    ) -> Result<RiskAssessmentResult, HealthguardError> {
        tracing::info!("Starting {} risk assessment...", kind);

        tracing::debug!("Step 1: Encoding input fields...");
        let vector = encode(kind, input)?;

        let (scaler, classifier) = self.artifacts_for(kind);

        tracing::debug!("Step 2: Applying pre-fitted scaling...");
        let scaled = scaler.transform(vector.values())?;

        tracing::debug!("Step 3: Running classifier...");
        let prediction = classifier.predict(&scaled).map_err(|e| match e {
            ClassifyError::Schema(e) => HealthguardError::SchemaMismatch(e),
            ClassifyError::Inference(e) => HealthguardError::Inference(e),
        })?;

        let result = RiskAssessmentResult::new(kind, prediction.label, prediction.probability);

        tracing::info!(
            "Assessment complete: kind={}, risk={}, probability={:.1}%",
            result.kind,
            result.tier(),
            result.probability * 100.0
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RiskTier;
    use crate::ports::{InferenceError, Prediction};

    fn create_test_service() -> AssessmentService<StandardScaler, LogisticClassifier> {
        AssessmentService::load(Path::new("models")).expect("Artifacts should load for tests")
    }

    fn diabetes_input() -> AssessmentInput {
        AssessmentInput::new()
            .with("pregnancies", 0.0)
            .with("glucose", 100.0)
            .with("blood_pressure", 70.0)
            .with("skin_thickness", 20.0)
            .with("insulin", 80.0)
            .with("bmi", 25.0)
            .with("diabetes_pedigree", 0.5)
            .with("age", 30.0)
    }

    fn heart_input_low() -> AssessmentInput {
        AssessmentInput::new()
            .with("age", 35.0)
            .with("sex", "Female")
            .with("chest_pain_type", "Typical angina")
            .with("resting_bp", 110.0)
            .with("cholesterol", 180.0)
            .with("fasting_blood_sugar", "No")
            .with("resting_ecg", "Normal")
            .with("max_heart_rate", 185.0)
            .with("exercise_angina", "No")
            .with("st_depression", 0.0)
            .with("st_slope", "Upsloping")
            .with("major_vessels", 0.0)
            .with("thalassemia", "Normal")
    }

    fn heart_input_high() -> AssessmentInput {
        AssessmentInput::new()
            .with("age", 63.0)
            .with("sex", "Male")
            .with("chest_pain_type", "Asymptomatic")
            .with("resting_bp", 150.0)
            .with("cholesterol", 320.0)
            .with("fasting_blood_sugar", "Yes")
            .with("resting_ecg", "Left ventricular hypertrophy")
            .with("max_heart_rate", 108.0)
            .with("exercise_angina", "Yes")
            .with("st_depression", 3.2)
            .with("st_slope", "Downsloping")
            .with("major_vessels", 3.0)
            .with("thalassemia", "Reversible defect")
    }

    #[test]
    fn test_diabetes_assessment_low_risk() {
        let service = create_test_service();
        let result = service
            .assess(AssessmentKind::Diabetes, &diabetes_input())
            .expect("Should assess");

        assert_eq!(result.kind, AssessmentKind::Diabetes);
        assert!(result.probability >= 0.0 && result.probability <= 1.0);
        assert!(result.probability < 0.2);
        assert!(!result.is_high_risk);
        assert!(result.advisory_text.starts_with("Low risk of diabetes ("));
    }

    #[test]
    fn test_diabetes_assessment_high_risk() {
        let service = create_test_service();
        let input = AssessmentInput::new()
            .with("pregnancies", 8.0)
            .with("glucose", 196.0)
            .with("blood_pressure", 90.0)
            .with("skin_thickness", 35.0)
            .with("insulin", 300.0)
            .with("bmi", 42.0)
            .with("diabetes_pedigree", 1.8)
            .with("age", 55.0);

        let result = service
            .assess(AssessmentKind::Diabetes, &input)
            .expect("Should assess");

        assert!(result.probability > 0.9);
        assert!(result.is_high_risk);
        assert_eq!(result.tier(), RiskTier::High);
        assert!(result.advisory_text.starts_with("High risk of diabetes ("));
    }

    #[test]
    fn test_diabetes_label_uses_artifact_threshold() {
        // The shipped diabetes classifier operates at a recall-oriented 0.3
        // threshold, so a probability below 0.5 can still be high risk.
        let service = create_test_service();
        let input = diabetes_input().with("glucose", 165.0);

        let result = service
            .assess(AssessmentKind::Diabetes, &input)
            .expect("Should assess");

        assert!(result.probability > 0.3 && result.probability < 0.5);
        assert!(result.is_high_risk);
    }

    #[test]
    fn test_heart_assessment_both_tiers() {
        let service = create_test_service();

        let low = service
            .assess(AssessmentKind::HeartDisease, &heart_input_low())
            .expect("Should assess");
        assert!(!low.is_high_risk);
        assert!(low.probability < 0.1);
        assert!(low.advisory_text.starts_with("Low risk of heart disease ("));

        let high = service
            .assess(AssessmentKind::HeartDisease, &heart_input_high())
            .expect("Should assess");
        assert!(high.is_high_risk);
        assert!(high.probability > 0.9);
        assert!(high.advisory_text.starts_with("High risk of heart disease ("));
    }

    #[test]
    fn test_assessment_is_deterministic() {
        let service = create_test_service();
        let input = heart_input_low();

        let first = service
            .assess(AssessmentKind::HeartDisease, &input)
            .expect("Should assess");
        let second = service
            .assess(AssessmentKind::HeartDisease, &input)
            .expect("Should assess");

        assert_eq!(first, second);
    }

    #[test]
    fn test_validation_error_surfaces() {
        let service = create_test_service();
        let input = heart_input_low().with("chest_pain_type", "Unknown");

        let err = service
            .assess(AssessmentKind::HeartDisease, &input)
            .expect_err("Should fail");
        assert!(matches!(err, HealthguardError::Validation(_)));
    }

    #[test]
    fn test_constructor_rejects_drifted_artifacts() {
        let catalog = ArtifactCatalog::load(Path::new("models")).expect("Should load");
        let misfiled = AssessmentService::new(
            catalog.heart_scaler,
            catalog.heart_classifier,
            catalog.diabetes_scaler,
            catalog.diabetes_classifier,
        );

        assert!(matches!(
            misfiled,
            Err(HealthguardError::SchemaMismatch(_))
        ));
    }

    struct BrokenClassifier {
        dims: usize,
    }

    impl Classifier for BrokenClassifier {
        fn dimensions(&self) -> usize {
            self.dims
        }

        fn predict(&self, _features: &[f64]) -> Result<Prediction, ClassifyError> {
            Err(InferenceError::ProbabilityOutOfRange(1.5).into())
        }
    }

    #[test]
    fn test_inference_error_surfaces() {
        let catalog = ArtifactCatalog::load(Path::new("models")).expect("Should load");
        let service = AssessmentService::new(
            catalog.diabetes_scaler,
            BrokenClassifier { dims: 8 },
            catalog.heart_scaler,
            BrokenClassifier { dims: 13 },
        )
        .expect("Should build");

        let err = service
            .assess(AssessmentKind::Diabetes, &diabetes_input())
            .expect_err("Should fail");
        assert!(matches!(err, HealthguardError::Inference(_)));
    }
}
