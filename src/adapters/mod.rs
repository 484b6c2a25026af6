//! Adapters layer: Concrete implementations of ports.
//!
//! - `linear`: fitted StandardScaler + logistic regression loaded from the
//!   JSON artifacts exported by the training pipeline.

pub mod linear;

pub use linear::{load_artifacts, LogisticModel, StandardScaler};
