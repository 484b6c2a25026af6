//! Ports layer: Trait definitions for the external model artifacts.
//!
//! Following Hexagonal Architecture, these traits keep the fitted scaler and
//! classifier opaque to the application: the pipeline only depends on the
//! input vector shape/order it must send and the result shape it gets back.

mod classifier;
mod scaler;

pub use classifier::RiskClassifier;
pub use scaler::FeatureScaler;

/// Errors from the external scaler/classifier artifacts.
///
/// These are configuration or artifact defects, not transient failures;
/// retrying a deterministic computation against the same artifact will not
/// help, so no retry path exists.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Model artifact not loaded: {0}")]
    NotLoaded(String),

    #[error("Failed to read model artifact: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid model artifact: {0}")]
    Format(String),

    #[error("Feature vector length mismatch: expected {expected}, got {got}")]
    Shape { expected: usize, got: usize },

    #[error("Classifier produced invalid probability: {0}")]
    InvalidProbability(f64),
}
