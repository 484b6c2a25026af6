//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement the single
//! use case of the application: one prediction per form submission.

mod prediction;

pub use prediction::PredictionService;
