//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a medical-themed interface for:
//! - Dashboard with system status
//! - Patient data input
//! - Risk verdict display

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::MedicalTheme;
