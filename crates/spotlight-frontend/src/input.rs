//! Viewport input: pointer gestures for the orbit controls and resize detection

use glam::Vec2;

use spotlight_core::{OrbitControls, PerspectiveCamera};

/// Pointer activity over the viewport during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerInput {
    /// Primary-button drag (orbit), in points
    pub orbit: Vec2,
    /// Secondary- or middle-button drag (pan), in points
    pub pan: Vec2,
    /// Vertical scroll, positive away from the user (dolly in)
    pub scroll: f32,
}

impl PointerInput {
    /// Read the gestures the viewport response received this frame.
    pub fn from_response(ui: &egui::Ui, response: &egui::Response) -> Self {
        let drag = response.drag_delta();
        let drag = Vec2::new(drag.x, drag.y);

        let orbit = if response.dragged_by(egui::PointerButton::Primary) {
            drag
        } else {
            Vec2::ZERO
        };
        let pan = if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            drag
        } else {
            Vec2::ZERO
        };
        let scroll = if response.hovered() {
            ui.input(|i| i.smooth_scroll_delta.y)
        } else {
            0.0
        };

        Self { orbit, pan, scroll }
    }

    pub fn is_idle(&self) -> bool {
        self.orbit == Vec2::ZERO && self.pan == Vec2::ZERO && self.scroll == 0.0
    }

    /// Queue this frame's gestures on the controls. The camera itself moves
    /// on the next `OrbitControls::update`.
    pub fn apply(&self, controls: &mut OrbitControls, camera: &PerspectiveCamera, viewport_height: f32) {
        if self.orbit != Vec2::ZERO {
            controls.rotate(self.orbit, viewport_height);
        }
        if self.pan != Vec2::ZERO {
            controls.pan(self.pan, viewport_height, camera);
        }
        if self.scroll != 0.0 {
            controls.zoom(self.scroll);
        }
    }
}

/// Viewport size in logical points plus the pixels-per-point it was measured at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
    pub pixels_per_point: f32,
}

/// Reports a resize when the viewport size or scale factor changes between frames.
#[derive(Debug, Default)]
pub struct ResizeWatcher {
    last: Option<ViewportSize>,
}

impl ResizeWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the new size if it differs from the previous frame's.
    pub fn observe(&mut self, size: ViewportSize) -> Option<ViewportSize> {
        if self.last == Some(size) {
            return None;
        }
        self.last = Some(size);
        Some(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spotlight_core::OrbitConfig;

    fn size(width: f32, height: f32, pixels_per_point: f32) -> ViewportSize {
        ViewportSize {
            width,
            height,
            pixels_per_point,
        }
    }

    #[test]
    fn test_resize_watcher_reports_changes_only() {
        let mut watcher = ResizeWatcher::new();

        assert_eq!(watcher.observe(size(800.0, 600.0, 1.0)), Some(size(800.0, 600.0, 1.0)));
        assert_eq!(watcher.observe(size(800.0, 600.0, 1.0)), None);
        assert_eq!(watcher.observe(size(800.0, 600.0, 2.0)), Some(size(800.0, 600.0, 2.0)));
        assert_eq!(watcher.observe(size(1024.0, 600.0, 2.0)), Some(size(1024.0, 600.0, 2.0)));
    }

    #[test]
    fn test_idle_input_leaves_controls_alone() {
        let camera = PerspectiveCamera::new(27.0, 1.0, 0.1, 200.0);
        let mut controls = OrbitControls::new(&OrbitConfig::default());

        let input = PointerInput::default();
        assert!(input.is_idle());
        input.apply(&mut controls, &camera, 600.0);
        assert!(!controls.is_moving());
    }

    #[test]
    fn test_gestures_queue_motion() {
        let camera = PerspectiveCamera::new(27.0, 1.0, 0.1, 200.0);

        for input in [
            PointerInput {
                orbit: Vec2::new(10.0, 0.0),
                ..Default::default()
            },
            PointerInput {
                pan: Vec2::new(0.0, 5.0),
                ..Default::default()
            },
            PointerInput {
                scroll: -3.0,
                ..Default::default()
            },
        ] {
            let mut controls = OrbitControls::new(&OrbitConfig::default());
            assert!(!input.is_idle());
            input.apply(&mut controls, &camera, 600.0);
            assert!(controls.is_moving(), "{input:?}");
        }
    }
}
