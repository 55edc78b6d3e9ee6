//! Spotlight Stage Frontend
//!
//! egui application hosting the spotlight stage viewport, the debug panel
//! and the FPS overlay.

mod app;
pub mod config;
pub mod input;
mod panels;
mod viewport_state;

pub use app::{AppError, SpotlightApp};
