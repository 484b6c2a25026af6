//! Linear model adapter: fitted StandardScaler and logistic regression.
//!
//! The two artifacts are JSON exports of the Python training pipeline
//! (`scaler.json`, `model.json`). They are loaded once at startup, validated
//! against the fixed 13-column feature order, and treated as immutable
//! afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{FEATURE_COUNT, FEATURE_NAMES};
use crate::ports::{FeatureScaler, ModelError, RiskClassifier};

/// File name of the fitted scaler artifact inside the model directory.
pub const SCALER_FILE: &str = "scaler.json";

/// File name of the fitted classifier artifact inside the model directory.
pub const MODEL_FILE: &str = "model.json";

/// Fitted StandardScaler parameters exported by the Python pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerArtifact {
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Fitted logistic regression parameters exported by the Python pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

fn check_feature_names(names: &[String], file: &str) -> Result<(), ModelError> {
    if names.len() != FEATURE_COUNT {
        return Err(ModelError::Format(format!(
            "{file}: expected {FEATURE_COUNT} feature names, got {}",
            names.len()
        )));
    }
    for (got, expected) in names.iter().zip(FEATURE_NAMES.iter()) {
        if got != expected {
            return Err(ModelError::Format(format!(
                "{file}: feature order mismatch, found {got:?} where {expected:?} was fitted"
            )));
        }
    }
    Ok(())
}

/// Standardizing transform: `(x - mean) / scale` per column.
#[derive(Debug)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Build a scaler from exported parameters, validating the shapes.
    ///
    /// # Errors
    /// Returns `ModelError::Format` on length/name mismatches or zero scales.
    pub fn from_artifact(artifact: ScalerArtifact) -> Result<Self, ModelError> {
        check_feature_names(&artifact.feature_names, SCALER_FILE)?;

        if artifact.mean.len() != FEATURE_COUNT || artifact.scale.len() != FEATURE_COUNT {
            return Err(ModelError::Format(format!(
                "{SCALER_FILE}: mean/scale lengths do not match feature_names length"
            )));
        }
        if let Some(i) = artifact.scale.iter().position(|s| *s == 0.0 || !s.is_finite()) {
            return Err(ModelError::Format(format!(
                "{SCALER_FILE}: scale for {:?} must be finite and non-zero",
                artifact.feature_names[i]
            )));
        }

        Ok(Self {
            mean: artifact.mean,
            scale: artifact.scale,
        })
    }

    /// Load the fitted scaler from `scaler.json` in the given directory.
    ///
    /// # Errors
    /// Returns error if the file is missing, unreadable, or malformed.
    pub fn load(model_dir: &Path) -> Result<Self, ModelError> {
        let path = model_dir.join(SCALER_FILE);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            ModelError::NotLoaded(format!("scaler artifact {path:?} unavailable: {e}"))
        })?;
        let artifact: ScalerArtifact = serde_json::from_str(&content)
            .map_err(|e| ModelError::Format(format!("{SCALER_FILE}: {e}")))?;

        let scaler = Self::from_artifact(artifact)?;
        tracing::info!("Loaded fitted scaler from {:?}", path);
        Ok(scaler)
    }
}

impl FeatureScaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        if features.len() != self.mean.len() {
            return Err(ModelError::Shape {
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

/// Fitted binary logistic regression with a sigmoid link.
#[derive(Debug)]
pub struct LogisticModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LogisticModel {
    /// Build a classifier from exported parameters, validating the shapes.
    ///
    /// # Errors
    /// Returns `ModelError::Format` on length or name-order mismatches.
    pub fn from_artifact(artifact: ClassifierArtifact) -> Result<Self, ModelError> {
        check_feature_names(&artifact.feature_names, MODEL_FILE)?;

        if artifact.coefficients.len() != FEATURE_COUNT {
            return Err(ModelError::Format(format!(
                "{MODEL_FILE}: coefficient length does not match feature_names length"
            )));
        }
        if !artifact.intercept.is_finite()
            || artifact.coefficients.iter().any(|c| !c.is_finite())
        {
            return Err(ModelError::Format(format!(
                "{MODEL_FILE}: coefficients and intercept must be finite"
            )));
        }

        Ok(Self {
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
        })
    }

    /// Load the fitted classifier from `model.json` in the given directory.
    ///
    /// # Errors
    /// Returns error if the file is missing, unreadable, or malformed.
    pub fn load(model_dir: &Path) -> Result<Self, ModelError> {
        let path = model_dir.join(MODEL_FILE);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            ModelError::NotLoaded(format!("classifier artifact {path:?} unavailable: {e}"))
        })?;
        let artifact: ClassifierArtifact = serde_json::from_str(&content)
            .map_err(|e| ModelError::Format(format!("{MODEL_FILE}: {e}")))?;

        let model = Self::from_artifact(artifact)?;
        tracing::info!("Loaded fitted classifier from {:?}", path);
        Ok(model)
    }

    fn decision_value(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::Shape {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }

        let dot: f64 = features
            .iter()
            .zip(self.coefficients.iter())
            .map(|(x, w)| x * w)
            .sum();
        Ok(dot + self.intercept)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl RiskClassifier for LogisticModel {
    fn predict(&self, features: &[f64]) -> Result<u8, ModelError> {
        let (_, p_high) = self.predict_proba(features)?;
        Ok(u8::from(p_high >= 0.5))
    }

    fn predict_proba(&self, features: &[f64]) -> Result<(f64, f64), ModelError> {
        let z = self.decision_value(features)?;
        let p_high = sigmoid(z);

        if !p_high.is_finite() || !(0.0..=1.0).contains(&p_high) {
            return Err(ModelError::InvalidProbability(p_high));
        }

        Ok((1.0 - p_high, p_high))
    }
}

/// Load both fitted artifacts from a model directory.
///
/// # Errors
/// Returns error if either artifact is missing or malformed.
pub fn load_artifacts(model_dir: &Path) -> Result<(StandardScaler, LogisticModel), ModelError> {
    let scaler = StandardScaler::load(model_dir)?;
    let classifier = LogisticModel::load(model_dir)?;
    tracing::info!(
        "Model artifacts ready ({} features, fixed column order)",
        FEATURE_COUNT
    );
    Ok((scaler, classifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn fitted_names() -> Vec<String> {
        FEATURE_NAMES.iter().map(|s| (*s).to_string()).collect()
    }

    fn identity_scaler() -> StandardScaler {
        StandardScaler::from_artifact(ScalerArtifact {
            feature_names: fitted_names(),
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        })
        .expect("identity scaler")
    }

    #[test]
    fn test_transform_standardizes_values() {
        let mut mean = vec![0.0; FEATURE_COUNT];
        let mut scale = vec![1.0; FEATURE_COUNT];
        mean[0] = 50.0;
        scale[0] = 10.0;

        let scaler = StandardScaler::from_artifact(ScalerArtifact {
            feature_names: fitted_names(),
            mean,
            scale,
        })
        .expect("scaler");

        let mut raw = vec![0.0; FEATURE_COUNT];
        raw[0] = 60.0;
        let scaled = scaler.transform(&raw).expect("transform");

        assert_eq!(scaled.len(), FEATURE_COUNT);
        assert!((scaled[0] - 1.0).abs() < 1e-12);
        assert!((scaled[1] - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_transform_rejects_wrong_length() {
        let scaler = identity_scaler();
        let err = scaler.transform(&[1.0, 2.0]).expect_err("must fail");
        assert!(matches!(
            err,
            ModelError::Shape {
                expected: FEATURE_COUNT,
                got: 2
            }
        ));
    }

    #[test]
    fn test_scaler_rejects_zero_scale() {
        let mut scale = vec![1.0; FEATURE_COUNT];
        scale[4] = 0.0;

        let err = StandardScaler::from_artifact(ScalerArtifact {
            feature_names: fitted_names(),
            mean: vec![0.0; FEATURE_COUNT],
            scale,
        })
        .expect_err("must fail");
        assert!(err.to_string().contains("non-zero"));
    }

    #[test]
    fn test_artifact_rejects_reordered_features() {
        let mut names = fitted_names();
        names.swap(0, 1);

        let err = StandardScaler::from_artifact(ScalerArtifact {
            feature_names: names,
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        })
        .expect_err("must fail");
        assert!(err.to_string().contains("feature order mismatch"));
    }

    #[test]
    fn test_probabilities_sum_to_one_and_predict_is_consistent() {
        let model = LogisticModel::from_artifact(ClassifierArtifact {
            feature_names: fitted_names(),
            coefficients: vec![0.5; FEATURE_COUNT],
            intercept: -0.25,
        })
        .expect("model");

        for fill in [-2.0, -0.1, 0.0, 0.1, 2.0] {
            let features = vec![fill; FEATURE_COUNT];
            let (p_low, p_high) = model.predict_proba(&features).expect("proba");
            let class = model.predict(&features).expect("predict");

            assert!((p_low + p_high - 1.0).abs() < 1e-12);
            assert!((0.0..=1.0).contains(&p_high));
            assert_eq!(class, u8::from(p_high >= 0.5));
        }
    }

    #[test]
    fn test_logistic_link_at_zero_decision_value() {
        let model = LogisticModel::from_artifact(ClassifierArtifact {
            feature_names: fitted_names(),
            coefficients: vec![0.0; FEATURE_COUNT],
            intercept: 0.0,
        })
        .expect("model");

        let (p_low, p_high) = model.predict_proba(&vec![3.0; FEATURE_COUNT]).expect("proba");
        assert!((p_high - 0.5).abs() < 1e-12);
        assert!((p_low - 0.5).abs() < 1e-12);
        // 0.5 sits exactly on the threshold and maps to the high-risk class.
        assert_eq!(model.predict(&vec![3.0; FEATURE_COUNT]).expect("predict"), 1);
    }

    #[test]
    fn test_load_artifacts_roundtrip() {
        let temp = tempdir().expect("tempdir");
        let dir = temp.path();

        let scaler = ScalerArtifact {
            feature_names: fitted_names(),
            mean: vec![1.0; FEATURE_COUNT],
            scale: vec![2.0; FEATURE_COUNT],
        };
        let classifier = ClassifierArtifact {
            feature_names: fitted_names(),
            coefficients: vec![0.1; FEATURE_COUNT],
            intercept: -0.5,
        };
        std::fs::write(
            dir.join(SCALER_FILE),
            serde_json::to_string(&scaler).expect("serialize"),
        )
        .expect("write scaler");
        std::fs::write(
            dir.join(MODEL_FILE),
            serde_json::to_string(&classifier).expect("serialize"),
        )
        .expect("write model");

        let (scaler, classifier) = load_artifacts(dir).expect("load");
        let scaled = scaler.transform(&vec![3.0; FEATURE_COUNT]).expect("transform");
        assert!((scaled[0] - 1.0).abs() < 1e-12);
        let (_, p_high) = classifier.predict_proba(&scaled).expect("proba");
        assert!((0.0..=1.0).contains(&p_high));
    }

    #[test]
    fn test_load_fails_on_missing_artifact() {
        let temp = tempdir().expect("tempdir");

        let err = load_artifacts(temp.path()).expect_err("must fail");
        assert!(matches!(err, ModelError::NotLoaded(_)));
    }

    #[test]
    fn test_load_fails_on_malformed_json() {
        let temp = tempdir().expect("tempdir");
        std::fs::write(temp.path().join(SCALER_FILE), "not json").expect("write");

        let err = StandardScaler::load(temp.path()).expect_err("must fail");
        assert!(matches!(err, ModelError::Format(_)));
    }

    #[test]
    fn test_shipped_artifacts_load() {
        let (scaler, classifier) = load_artifacts(Path::new("models")).expect("shipped artifacts");

        let raw = [
            50.0, 1.0, 0.0, 120.0, 240.0, 0.0, 0.0, 150.0, 0.0, 1.0, 0.0, 0.0, 0.0,
        ];
        let scaled = scaler.transform(&raw).expect("transform");
        assert_eq!(scaled.len(), FEATURE_COUNT);

        let (p_low, p_high) = classifier.predict_proba(&scaled).expect("proba");
        assert!((p_low + p_high - 1.0).abs() < 1e-9);
        assert!((0.0..=1.0).contains(&p_high));
    }
}
