//! Feature scaler port: Trait for the fitted scaling transform.

use super::ModelError;

/// Trait for the pre-fitted feature scaling transform.
///
/// Implementations are deterministic and side-effect free: the same input
/// vector always yields the same scaled vector of identical length.
pub trait FeatureScaler: Send + Sync {
    /// Apply the fitted transform to a raw feature vector.
    ///
    /// # Errors
    /// Returns `ModelError::Shape` if the input length does not match the
    /// number of features the transform was fitted on.
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ModelError>;
}
