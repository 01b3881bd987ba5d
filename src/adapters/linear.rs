//! Linear model adapter: standardization and logistic regression over
//! exported artifacts.
//!
//! The training pipeline fits a standard scaler and a logistic-regression
//! classifier offline and exports both as JSON. This module mirrors that
//! export format and re-implements only the forward pass: the artifacts are
//! opaque trained parameters, never re-fitted here.
//!
//! # Decision threshold
//!
//! The classifier artifact carries its own decision threshold (for example
//! a recall-oriented clinical operating point). `predict` applies it; the
//! probability is reported alongside so callers can display it, but callers
//! must not apply a threshold of their own.

use serde::{Deserialize, Serialize};

use crate::ports::{
    Classifier, ClassifyError, InferenceError, Prediction, Scaler, SchemaMismatchError,
};

/// Scaler parameters exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedScaler {
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Classifier parameters exported by the training pipeline.
///
/// `threshold` defaults to 0.5 when the export predates thresholded models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedClassifier {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

/// Pre-fitted standardization transform: (x - mean) / scale per feature.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Build a scaler from exported parameters.
    ///
    /// # Errors
    /// Returns a description of the problem if the parameter arrays are
    /// empty, have mismatched lengths, or contain values that would make
    /// the transform undefined.
    pub fn from_export(export: &ExportedScaler) -> Result<Self, String> {
        let n = export.feature_names.len();
        if n == 0 {
            return Err("Scaler export declares no features".to_string());
        }
        if export.mean.len() != n || export.scale.len() != n {
            return Err(format!(
                "Scaler parameter lengths do not match feature_names length {n}"
            ));
        }
        if export.mean.iter().any(|m| !m.is_finite()) {
            return Err("Scaler mean contains a non-finite value".to_string());
        }
        if export.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err("Scaler scale contains a zero or non-finite value".to_string());
        }

        Ok(Self {
            mean: export.mean.clone(),
            scale: export.scale.clone(),
        })
    }
}

impl Scaler for StandardScaler {
    fn dimensions(&self) -> usize {
        self.mean.len()
    }

    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, SchemaMismatchError> {
        if features.len() != self.mean.len() {
            return Err(SchemaMismatchError {
                expected: self.mean.len(),
                got: features.len(),
            });
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}

/// Pre-trained logistic-regression classifier.
#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    coefficients: Vec<f64>,
    intercept: f64,
    threshold: f64,
}

impl LogisticClassifier {
    /// Build a classifier from exported parameters.
    ///
    /// # Errors
    /// Returns a description of the problem if the parameter arrays are
    /// empty or mismatched, or the threshold is outside [0, 1].
    pub fn from_export(export: &ExportedClassifier) -> Result<Self, String> {
        let n = export.feature_names.len();
        if n == 0 {
            return Err("Classifier export declares no features".to_string());
        }
        if export.coefficients.len() != n {
            return Err(format!(
                "Classifier coefficient length does not match feature_names length {n}"
            ));
        }
        if export.coefficients.iter().any(|c| !c.is_finite()) || !export.intercept.is_finite() {
            return Err("Classifier parameters contain a non-finite value".to_string());
        }
        if !(0.0..=1.0).contains(&export.threshold) {
            return Err(format!(
                "Classifier threshold {} outside [0, 1]",
                export.threshold
            ));
        }

        Ok(Self {
            coefficients: export.coefficients.clone(),
            intercept: export.intercept,
            threshold: export.threshold,
        })
    }

    /// The decision threshold this artifact was exported with.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Classifier for LogisticClassifier {
    fn dimensions(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, features: &[f64]) -> Result<Prediction, ClassifyError> {
        if features.len() != self.coefficients.len() {
            return Err(SchemaMismatchError {
                expected: self.coefficients.len(),
                got: features.len(),
            }
            .into());
        }

        let logit: f64 = self
            .coefficients
            .iter()
            .zip(features.iter())
            .map(|(coefficient, x)| coefficient * x)
            .sum::<f64>()
            + self.intercept;

        let probability = sigmoid(logit);

        if !probability.is_finite() {
            return Err(InferenceError::NonFiniteProbability.into());
        }
        if !(0.0..=1.0).contains(&probability) {
            return Err(InferenceError::ProbabilityOutOfRange(probability).into());
        }

        let label = probability >= self.threshold;

        tracing::debug!(
            "Logistic response: logit={:.4}, probability={:.4}, label={}",
            logit,
            probability,
            label
        );

        Ok(Prediction { label, probability })
    }
}

/// Standard logistic function: 1 / (1 + exp(-x)).
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
