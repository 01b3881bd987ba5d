//! Feature encoding: raw form values into fixed-order numeric vectors.
//!
//! The encoder walks the schema declared for an [`AssessmentKind`] and
//! validates each field defensively, even though the input form already
//! constrains widget ranges. Categorical labels are translated through the
//! schema's fixed mappings with no fallback.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::assessment::{AssessmentKind, FieldKind};

/// A single raw field value as supplied by the input form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Numeric measurement (passed through unchanged)
    Number(f64),
    /// Categorical display label (translated to its trained code)
    Label(String),
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Label(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}

/// Raw input record for one assessment: field name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentInput {
    fields: BTreeMap<String, FieldValue>,
}

impl AssessmentInput {
    /// Create an empty input record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field value, replacing any previous value for that field.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Builder-style variant of [`AssessmentInput::insert`].
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Look up a field value by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Number of fields present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record contains no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Fixed-order numeric encoding of one assessment's input fields.
///
/// Only [`encode`] constructs these, so a `FeatureVector` always matches the
/// schema of the kind it carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    kind: AssessmentKind,
    values: Vec<f64>,
}

impl FeatureVector {
    /// The assessment kind this vector was encoded for.
    #[must_use]
    pub fn kind(&self) -> AssessmentKind {
        self.kind
    }

    /// Encoded values in schema order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of encoded features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector is empty (never true for a supported schema).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Errors raised while validating and encoding raw input fields.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Field '{field}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Field '{0}' must be a finite number")]
    NotFinite(&'static str),

    #[error("Field '{field}' has unrecognized label '{label}' (expected one of: {expected})")]
    UnknownLabel {
        field: &'static str,
        label: String,
        expected: String,
    },

    #[error("Field '{0}' expects a numeric value")]
    ExpectedNumber(&'static str),

    #[error("Field '{0}' expects a categorical label")]
    ExpectedLabel(&'static str),
}

/// Encode raw input fields into the fixed-order feature vector for `kind`.
///
/// Fields are processed in schema order and the first violation aborts the
/// encoding. Extra fields not named by the schema are ignored. Numeric
/// values must be finite and pass through unchanged after an inclusive
/// range check; categorical labels are matched case-sensitively.
///
/// # Errors
/// Returns [`ValidationError`] if a schema field is missing, non-finite,
/// out of its declared range, of the wrong kind, or carries an unmapped
/// label.
pub fn encode(
    kind: AssessmentKind,
    input: &AssessmentInput,
) -> Result<FeatureVector, ValidationError> {
    let schema = kind.schema();
    let mut values = Vec::with_capacity(schema.len());

    for spec in schema {
        let value = input
            .get(spec.name)
            .ok_or(ValidationError::MissingField(spec.name))?;

        let encoded = match (&spec.kind, value) {
            (FieldKind::Numeric { min, max }, FieldValue::Number(x)) => {
                if !x.is_finite() {
                    return Err(ValidationError::NotFinite(spec.name));
                }
                if !(*min..=*max).contains(x) {
                    return Err(ValidationError::OutOfRange {
                        field: spec.name,
                        value: *x,
                        min: *min,
                        max: *max,
                    });
                }
                *x
            }
            (FieldKind::Categorical(mapping), FieldValue::Label(label)) => mapping
                .code_for(label)
                .ok_or_else(|| ValidationError::UnknownLabel {
                    field: spec.name,
                    label: label.clone(),
                    expected: mapping.labels().collect::<Vec<_>>().join(", "),
                })?,
            (FieldKind::Numeric { .. }, FieldValue::Label(_)) => {
                return Err(ValidationError::ExpectedNumber(spec.name));
            }
            (FieldKind::Categorical(_), FieldValue::Number(_)) => {
                return Err(ValidationError::ExpectedLabel(spec.name));
            }
        };

        values.push(encoded);
    }

    Ok(FeatureVector { kind, values })
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn heart_input() -> AssessmentInput {
        AssessmentInput::new()
            .with("age", 50.0)
            .with("sex", "Male")
            .with("chest_pain_type", "Asymptomatic")
            .with("resting_bp", 120.0)
            .with("cholesterol", 200.0)
            .with("fasting_blood_sugar", "No")
            .with("resting_ecg", "Normal")
            .with("max_heart_rate", 150.0)
            .with("exercise_angina", "No")
            .with("st_depression", 1.0)
            .with("st_slope", "Flat")
            .with("major_vessels", 0.0)
            .with("thalassemia", "Normal")
    }

    #[test]
    fn test_diabetes_encoding_order() {
        let vector = encode(AssessmentKind::Diabetes, &diabetes_input()).expect("Should encode");
        assert_eq!(vector.kind(), AssessmentKind::Diabetes);
        assert_eq!(
            vector.values(),
            &[0.0, 100.0, 70.0, 20.0, 80.0, 25.0, 0.5, 30.0]
        );
    }

    #[test]
    fn test_heart_encoding_translates_labels() {
        let vector = encode(AssessmentKind::HeartDisease, &heart_input()).expect("Should encode");
        assert_eq!(vector.len(), 13);
        // sex=Male -> 1, chest_pain_type=Asymptomatic -> 3, st_slope=Flat -> 1
        assert_eq!(vector.values()[1], 1.0);
        assert_eq!(vector.values()[2], 3.0);
        assert_eq!(vector.values()[10], 1.0);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let input = heart_input();
        let first = encode(AssessmentKind::HeartDisease, &input).expect("Should encode");
        let second = encode(AssessmentKind::HeartDisease, &input).expect("Should encode");
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_field() {
        let input = AssessmentInput::new()
            .with("pregnancies", 0.0)
            .with("blood_pressure", 70.0);
        let err = encode(AssessmentKind::Diabetes, &input).expect_err("Should fail");
        assert_eq!(err, ValidationError::MissingField("glucose"));
    }

    #[test]
    fn test_out_of_range_value() {
        let input = diabetes_input().with("glucose", 350.0);
        let err = encode(AssessmentKind::Diabetes, &input).expect_err("Should fail");
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "glucose",
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_value() {
        let input = diabetes_input().with("bmi", f64::NAN);
        let err = encode(AssessmentKind::Diabetes, &input).expect_err("Should fail");
        assert_eq!(err, ValidationError::NotFinite("bmi"));

        let input = diabetes_input().with("glucose", f64::INFINITY);
        let err = encode(AssessmentKind::Diabetes, &input).expect_err("Should fail");
        assert_eq!(err, ValidationError::NotFinite("glucose"));
    }

    #[test]
    fn test_unknown_categorical_label() {
        let input = heart_input().with("chest_pain_type", "Unknown");
        let err = encode(AssessmentKind::HeartDisease, &input).expect_err("Should fail");
        assert!(matches!(
            &err,
            ValidationError::UnknownLabel {
                field: "chest_pain_type",
                ..
            }
        ));
        // The message names the accepted labels for correction.
        assert!(err.to_string().contains("Typical angina"));
    }

    #[test]
    fn test_label_case_is_significant() {
        let input = heart_input().with("sex", "male");
        let err = encode(AssessmentKind::HeartDisease, &input).expect_err("Should fail");
        assert!(matches!(err, ValidationError::UnknownLabel { field: "sex", .. }));
    }

    #[test]
    fn test_wrong_value_kind() {
        let labelled = diabetes_input().with("glucose", "high");
        assert_eq!(
            encode(AssessmentKind::Diabetes, &labelled).expect_err("Should fail"),
            ValidationError::ExpectedNumber("glucose")
        );

        let numeric = heart_input().with("sex", 1.0);
        assert_eq!(
            encode(AssessmentKind::HeartDisease, &numeric).expect_err("Should fail"),
            ValidationError::ExpectedLabel("sex")
        );
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let input = diabetes_input().with("unrelated", 42.0);
        let vector = encode(AssessmentKind::Diabetes, &input).expect("Should encode");
        assert_eq!(vector.len(), 8);
    }
}
