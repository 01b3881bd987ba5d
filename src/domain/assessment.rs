//! Assessment schemas: the fixed input contract for each risk model.
//!
//! Every assessment kind declares an ordered list of fields. The declared
//! order IS the feature order the pre-fitted scaler and classifier were
//! trained against, so it must never change without retraining and
//! re-exporting those artifacts.

use serde::{Deserialize, Serialize};

/// Which of the supported risk models to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssessmentKind {
    /// Diabetes risk (Pima-style 8-feature schema)
    Diabetes,
    /// Heart disease risk (Cleveland-style 13-feature schema)
    HeartDisease,
}

impl AssessmentKind {
    /// The input schema for this kind, in model feature order.
    #[must_use]
    pub fn schema(&self) -> &'static [FieldSpec] {
        match self {
            Self::Diabetes => &DIABETES_FIELDS,
            Self::HeartDisease => &HEART_FIELDS,
        }
    }
}

impl std::fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Diabetes => write!(f, "diabetes"),
            Self::HeartDisease => write!(f, "heart disease"),
        }
    }
}

/// A fixed mapping between display labels and the integer codes the
/// model was trained on.
///
/// Immutable and defined once per categorical field; translation has no
/// fallback, so an unrecognized label is a caller error.
#[derive(Debug, Clone, Copy)]
pub struct CategoricalMapping {
    entries: &'static [(&'static str, f64)],
}

impl CategoricalMapping {
    const fn new(entries: &'static [(&'static str, f64)]) -> Self {
        Self { entries }
    }

    /// Translate a display label to its trained code.
    #[must_use]
    pub fn code_for(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == label)
            .map(|(_, code)| *code)
    }

    /// Translate a trained code back to its display label.
    #[must_use]
    pub fn label_for(&self, code: f64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, candidate)| *candidate == code)
            .map(|(label, _)| *label)
    }

    /// All accepted labels, in declared order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(label, _)| *label)
    }
}

/// How a single schema field is validated and encoded.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Passed through unchanged after an inclusive range check.
    Numeric { min: f64, max: f64 },
    /// Translated to its trained integer code via a fixed mapping.
    Categorical(&'static CategoricalMapping),
}

/// One field of an assessment schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name as supplied by the input form
    pub name: &'static str,
    /// Validation and encoding rule
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn numeric(name: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            kind: FieldKind::Numeric { min, max },
        }
    }

    const fn categorical(name: &'static str, mapping: &'static CategoricalMapping) -> Self {
        Self {
            name,
            kind: FieldKind::Categorical(mapping),
        }
    }
}

/// Sex: Female = 0, Male = 1.
static SEX: CategoricalMapping =
    CategoricalMapping::new(&[("Female", 0.0), ("Male", 1.0)]);

/// Chest pain type, coded 0-3 in clinical severity order.
static CHEST_PAIN: CategoricalMapping = CategoricalMapping::new(&[
    ("Typical angina", 0.0),
    ("Atypical angina", 1.0),
    ("Non-anginal pain", 2.0),
    ("Asymptomatic", 3.0),
]);

/// Binary No/Yes answers (fasting blood sugar > 120, exercise angina).
static YES_NO: CategoricalMapping = CategoricalMapping::new(&[("No", 0.0), ("Yes", 1.0)]);

/// Resting electrocardiogram result, coded 0-2.
static RESTING_ECG: CategoricalMapping = CategoricalMapping::new(&[
    ("Normal", 0.0),
    ("ST-T wave abnormality", 1.0),
    ("Left ventricular hypertrophy", 2.0),
]);

/// Slope of the peak exercise ST segment, coded 0-2.
static ST_SLOPE: CategoricalMapping = CategoricalMapping::new(&[
    ("Upsloping", 0.0),
    ("Flat", 1.0),
    ("Downsloping", 2.0),
]);

/// Thalassemia status, coded 0-2.
static THALASSEMIA: CategoricalMapping = CategoricalMapping::new(&[
    ("Normal", 0.0),
    ("Fixed defect", 1.0),
    ("Reversible defect", 2.0),
]);

/// Diabetes schema (8 features):
/// pregnancies, glucose, blood_pressure, skin_thickness, insulin, bmi,
/// diabetes_pedigree, age.
pub static DIABETES_FIELDS: [FieldSpec; 8] = [
    FieldSpec::numeric("pregnancies", 0.0, 20.0),
    FieldSpec::numeric("glucose", 0.0, 300.0),
    FieldSpec::numeric("blood_pressure", 0.0, 200.0),
    FieldSpec::numeric("skin_thickness", 0.0, 100.0),
    FieldSpec::numeric("insulin", 0.0, 1000.0),
    FieldSpec::numeric("bmi", 0.0, 70.0),
    FieldSpec::numeric("diabetes_pedigree", 0.0, 3.0),
    FieldSpec::numeric("age", 0.0, 120.0),
];

/// Heart disease schema (13 features):
/// age, sex, chest_pain_type, resting_bp, cholesterol, fasting_blood_sugar,
/// resting_ecg, max_heart_rate, exercise_angina, st_depression, st_slope,
/// major_vessels, thalassemia.
pub static HEART_FIELDS: [FieldSpec; 13] = [
    FieldSpec::numeric("age", 0.0, 120.0),
    FieldSpec::categorical("sex", &SEX),
    FieldSpec::categorical("chest_pain_type", &CHEST_PAIN),
    FieldSpec::numeric("resting_bp", 80.0, 200.0),
    FieldSpec::numeric("cholesterol", 100.0, 600.0),
    FieldSpec::categorical("fasting_blood_sugar", &YES_NO),
    FieldSpec::categorical("resting_ecg", &RESTING_ECG),
    FieldSpec::numeric("max_heart_rate", 60.0, 220.0),
    FieldSpec::categorical("exercise_angina", &YES_NO),
    FieldSpec::numeric("st_depression", 0.0, 10.0),
    FieldSpec::categorical("st_slope", &ST_SLOPE),
    FieldSpec::numeric("major_vessels", 0.0, 4.0),
    FieldSpec::categorical("thalassemia", &THALASSEMIA),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lengths() {
        assert_eq!(AssessmentKind::Diabetes.schema().len(), 8);
        assert_eq!(AssessmentKind::HeartDisease.schema().len(), 13);
    }

    #[test]
    fn test_schema_field_order() {
        let diabetes = AssessmentKind::Diabetes.schema();
        assert_eq!(diabetes[0].name, "pregnancies");
        assert_eq!(diabetes[7].name, "age");

        let heart = AssessmentKind::HeartDisease.schema();
        assert_eq!(heart[0].name, "age");
        assert_eq!(heart[2].name, "chest_pain_type");
        assert_eq!(heart[12].name, "thalassemia");
    }

    #[test]
    fn test_categorical_translation() {
        assert_eq!(CHEST_PAIN.code_for("Asymptomatic"), Some(3.0));
        assert_eq!(CHEST_PAIN.code_for("Unknown"), None);
        assert_eq!(CHEST_PAIN.label_for(2.0), Some("Non-anginal pain"));
        assert_eq!(SEX.code_for("Male"), Some(1.0));
        assert_eq!(SEX.labels().count(), 2);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(AssessmentKind::Diabetes.to_string(), "diabetes");
        assert_eq!(AssessmentKind::HeartDisease.to_string(), "heart disease");
    }
}
