//! Application state shared by the panel, the render loop and resize handling

use crate::camera::PerspectiveCamera;
use crate::config::StageConfig;
use crate::orbit::OrbitControls;
use crate::params::SceneParams;
use crate::resize::{Viewport, handle_resize};
use crate::scene::Scene;

/// Everything the stage mutates at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub params: SceneParams,
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
    pub viewport: Viewport,
}

impl AppState {
    /// Build the stage for a viewport of `width` x `height` logical pixels.
    pub fn new(config: &StageConfig, width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        let params = config.params;
        let scene = Scene::build_with(&params, &config.lights);

        let mut viewport = Viewport {
            max_pixel_ratio: config.max_pixel_ratio,
            ..Default::default()
        };
        let mut camera = PerspectiveCamera::from_config(&config.camera, viewport.aspect());
        let mut controls = OrbitControls::new(&config.controls);
        controls.target = camera.target;

        handle_resize(&mut camera, &mut viewport, width, height, device_pixel_ratio);

        Self {
            params,
            scene,
            camera,
            controls,
            viewport,
        }
    }

    /// Apply a viewport size change. See [`handle_resize`].
    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) -> bool {
        handle_resize(
            &mut self.camera,
            &mut self.viewport,
            width,
            height,
            device_pixel_ratio,
        )
    }
}
