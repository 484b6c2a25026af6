//! Risk classifier port: Trait for the fitted binary classifier.

use super::ModelError;

/// Trait for the pre-fitted binary classifier.
///
/// Implementations are deterministic given identical input. Class 0 is low
/// risk, class 1 is high risk; `predict_proba` returns `(p0, p1)` with
/// `p0 + p1 = 1`.
pub trait RiskClassifier: Send + Sync {
    /// Predict the binary class (0 or 1) for a scaled feature vector.
    ///
    /// # Errors
    /// Returns `ModelError::Shape` if the input length does not match the
    /// number of features the classifier was fitted on.
    fn predict(&self, features: &[f64]) -> Result<u8, ModelError>;

    /// Predict class probabilities `(p0, p1)` for a scaled feature vector.
    ///
    /// # Errors
    /// Returns `ModelError::Shape` on input length mismatch, or
    /// `ModelError::InvalidProbability` if the computed probability is not a
    /// finite value in [0, 1].
    fn predict_proba(&self, features: &[f64]) -> Result<(f64, f64), ModelError>;
}
