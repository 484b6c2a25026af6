//! # Cardioscreen
//!
//! Heart disease risk screening from basic clinical measurements.
//!
//! This crate provides:
//! - A deterministic input-encoding and inference pipeline over two fitted
//!   model artifacts (scaling transform + binary classifier)
//! - A terminal UI that collects the 13 clinical fields and renders the
//!   risk verdict
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (patient input, encoding, assessment)
//! - `ports`: Trait definitions for the external model artifacts
//! - `adapters`: Concrete implementations (JSON scaler + logistic regression)
//! - `application`: The prediction use case orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{Assessment, PatientInput, RiskLabel};

/// Result type for Cardioscreen operations
pub type Result<T> = std::result::Result<T, CardioscreenError>;

/// Main error type for Cardioscreen
#[derive(Debug, thiserror::Error)]
pub enum CardioscreenError {
    #[error("Input encoding failed: {0}")]
    Encoding(#[from] domain::EncodingError),

    #[error("Model artifact failure: {0}")]
    Model(#[from] ports::ModelError),

    #[error("Invalid patient data: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
