//! Frame-rate overlay

use spotlight_core::FrameStats;

/// Overlay text: `"60 FPS (58-61)"`, or a placeholder until the first
/// one-second window has elapsed.
pub fn format_fps(stats: &FrameStats) -> String {
    match (stats.fps(), stats.min_fps(), stats.max_fps()) {
        (Some(fps), Some(min), Some(max)) => {
            format!("{:.0} FPS ({:.0}-{:.0})", fps, min, max)
        }
        _ => "-- FPS".to_string(),
    }
}

/// Read-only FPS readout pinned to the top-left of the viewport rect
pub fn render_fps_overlay(ui: &egui::Ui, rect: egui::Rect, stats: &FrameStats) {
    egui::Area::new(egui::Id::new("fps_overlay"))
        .fixed_pos(rect.left_top() + egui::vec2(8.0, 8.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(format_fps(stats)).monospace());
                ui.label(
                    egui::RichText::new(format!("{:.1} ms", stats.frame_ms()))
                        .monospace()
                        .weak(),
                );
            });
        });
}
