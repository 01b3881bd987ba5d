//! Artifact catalog: startup loading of the four trained model artifacts.
//!
//! The training pipeline exports one classifier and one scaler per
//! assessment kind. All four files must load and cross-validate against
//! the input schemas before the process serves any assessment; a failure
//! here is fatal at startup, never recovered per-request.

use std::path::{Path, PathBuf};

use crate::domain::AssessmentKind;
use crate::ports::{Classifier, Scaler};

use super::linear::{ExportedClassifier, ExportedScaler, LogisticClassifier, StandardScaler};

/// Fixed artifact file names within the model directory.
const DIABETES_MODEL_FILE: &str = "diabetes_model.json";
const DIABETES_SCALER_FILE: &str = "diabetes_scaler.json";
const HEART_MODEL_FILE: &str = "heart_model.json";
const HEART_SCALER_FILE: &str = "heart_scaler.json";

/// Errors raised while loading the trained artifacts at startup.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactLoadError {
    #[error("Failed to read artifact {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed artifact {path:?}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Inconsistent artifact {path:?}: {reason}")]
    Inconsistent { path: PathBuf, reason: String },
}

/// The four trained artifacts, loaded once and held for the process
/// lifetime.
///
/// Never mutated after load; shared read-only by all requests.
#[derive(Debug)]
pub struct ArtifactCatalog {
    pub diabetes_scaler: StandardScaler,
    pub diabetes_classifier: LogisticClassifier,
    pub heart_scaler: StandardScaler,
    pub heart_classifier: LogisticClassifier,
}

impl ArtifactCatalog {
    /// Load and cross-validate all four artifacts from `model_dir`.
    ///
    /// Each artifact's `feature_names` must match its schema exactly, in
    /// order, so that a retrained export with drifted features is rejected
    /// at startup instead of producing silently wrong scores.
    ///
    /// # Errors
    /// Returns [`ArtifactLoadError`] if any file is unreadable, fails to
    /// parse, or disagrees with its assessment schema.
    pub fn load(model_dir: &Path) -> Result<Self, ArtifactLoadError> {
        let diabetes_scaler =
            load_scaler(&model_dir.join(DIABETES_SCALER_FILE), AssessmentKind::Diabetes)?;
        let diabetes_classifier =
            load_classifier(&model_dir.join(DIABETES_MODEL_FILE), AssessmentKind::Diabetes)?;
        let heart_scaler =
            load_scaler(&model_dir.join(HEART_SCALER_FILE), AssessmentKind::HeartDisease)?;
        let heart_classifier =
            load_classifier(&model_dir.join(HEART_MODEL_FILE), AssessmentKind::HeartDisease)?;

        tracing::info!(
            "Loaded model artifacts from {:?} (diabetes: {} features, heart: {} features)",
            model_dir,
            diabetes_classifier.dimensions(),
            heart_classifier.dimensions()
        );

        Ok(Self {
            diabetes_scaler,
            diabetes_classifier,
            heart_scaler,
            heart_classifier,
        })
    }
}

fn load_scaler(path: &Path, kind: AssessmentKind) -> Result<StandardScaler, ArtifactLoadError> {
    let export: ExportedScaler = read_json(path)?;
    check_feature_names(&export.feature_names, kind, path)?;

    let scaler = StandardScaler::from_export(&export).map_err(|reason| {
        ArtifactLoadError::Inconsistent {
            path: path.to_path_buf(),
            reason,
        }
    })?;

    tracing::debug!("Loaded {} scaler ({} features)", kind, scaler.dimensions());
    Ok(scaler)
}

fn load_classifier(
    path: &Path,
    kind: AssessmentKind,
) -> Result<LogisticClassifier, ArtifactLoadError> {
    let export: ExportedClassifier = read_json(path)?;
    check_feature_names(&export.feature_names, kind, path)?;

    let classifier = LogisticClassifier::from_export(&export).map_err(|reason| {
        ArtifactLoadError::Inconsistent {
            path: path.to_path_buf(),
            reason,
        }
    })?;

    tracing::debug!(
        "Loaded {} classifier ({} features, threshold {})",
        kind,
        classifier.dimensions(),
        classifier.threshold()
    );
    Ok(classifier)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| ArtifactLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ArtifactLoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn check_feature_names(
    names: &[String],
    kind: AssessmentKind,
    path: &Path,
) -> Result<(), ArtifactLoadError> {
    let schema = kind.schema();
    let matches = names.len() == schema.len()
        && names
            .iter()
            .zip(schema.iter())
            .all(|(name, spec)| name == spec.name);

    if !matches {
        return Err(ArtifactLoadError::Inconsistent {
            path: path.to_path_buf(),
            reason: format!("feature names do not match the {kind} schema"),
        });
    }
    Ok(())
}
