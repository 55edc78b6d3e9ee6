//! UI panels

mod debug;
mod stats;

pub use debug::DebugPanel;
pub use stats::render_fps_overlay;

use spotlight_core::AppState;

/// Panel trait for UI panels
pub trait Panel {
    /// Panel name (also the window title)
    fn name(&self) -> &str;

    /// Render the panel UI
    fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState);
}
