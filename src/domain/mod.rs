//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no external dependencies.
//! All types are serializable and encoding is a closed, deterministic mapping.

mod assessment;
mod patient;

pub use assessment::{Assessment, RiskLabel};
pub use patient::{
    ChestPainType, EncodingError, ExerciseAngina, FastingBloodSugar, Gender, PatientInput,
    RestingEcg, StSlope, ThalStatus, AGE_RANGE, CHOLESTEROL_RANGE, FEATURE_COUNT, FEATURE_NAMES,
    MAJOR_VESSELS_RANGE, MAX_HEART_RATE_RANGE, RESTING_BP_RANGE, ST_DEPRESSION_RANGE,
};
