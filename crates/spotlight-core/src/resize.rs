//! Viewport sizing

use crate::camera::PerspectiveCamera;

/// Largest device pixel ratio the renderer will use.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Size of the draw surface in logical pixels plus the pixel ratio in use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
    pub max_pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            pixel_ratio: 1.0,
            max_pixel_ratio: MAX_PIXEL_RATIO,
        }
    }
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Render target size in physical pixels (at least 1x1).
    pub fn physical_size(&self) -> (u32, u32) {
        let width = (self.width * self.pixel_ratio).ceil().max(1.0) as u32;
        let height = (self.height * self.pixel_ratio).ceil().max(1.0) as u32;
        (width, height)
    }
}

/// Apply a viewport size change to the camera and draw surface.
///
/// Returns false, leaving everything untouched, for a zero-sized viewport.
pub fn handle_resize(
    camera: &mut PerspectiveCamera,
    viewport: &mut Viewport,
    width: f32,
    height: f32,
    device_pixel_ratio: f32,
) -> bool {
    if width <= 0.0 || height <= 0.0 {
        tracing::debug!("Ignoring resize to {}x{}", width, height);
        return false;
    }

    viewport.width = width;
    viewport.height = height;

    camera.aspect = width / height;
    camera.update_projection_matrix();

    viewport.pixel_ratio = device_pixel_ratio.min(viewport.max_pixel_ratio);

    tracing::debug!(
        "Viewport resized to {}x{} (pixel ratio {})",
        width,
        height,
        viewport.pixel_ratio
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CameraConfig;
    use approx::assert_relative_eq;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::from_config(&CameraConfig::default(), 1.0)
    }

    #[test]
    fn test_resize_updates_aspect_and_projection() {
        let mut cam = camera();
        let mut viewport = Viewport::default();
        let before = cam.projection_matrix();

        assert!(handle_resize(&mut cam, &mut viewport, 1920.0, 1080.0, 1.0));

        assert_relative_eq!(cam.aspect, 1920.0 / 1080.0);
        assert_ne!(cam.projection_matrix(), before);
        assert_eq!(viewport.width, 1920.0);
        assert_eq!(viewport.height, 1080.0);
    }

    #[test]
    fn test_pixel_ratio_is_capped() {
        let mut cam = camera();
        let mut viewport = Viewport::default();

        handle_resize(&mut cam, &mut viewport, 100.0, 100.0, 3.0);
        assert_eq!(viewport.pixel_ratio, 2.0);

        handle_resize(&mut cam, &mut viewport, 100.0, 100.0, 1.25);
        assert_eq!(viewport.pixel_ratio, 1.25);
    }

    #[test]
    fn test_zero_size_is_ignored() {
        let mut cam = camera();
        let mut viewport = Viewport::default();
        let before = (cam.clone(), viewport);

        assert!(!handle_resize(&mut cam, &mut viewport, 0.0, 720.0, 1.0));
        assert_eq!((cam, viewport), before);
    }

    #[test]
    fn test_physical_size() {
        let viewport = Viewport {
            width: 100.5,
            height: 50.0,
            pixel_ratio: 2.0,
            max_pixel_ratio: MAX_PIXEL_RATIO,
        };
        assert_eq!(viewport.physical_size(), (201, 100));
    }
}
