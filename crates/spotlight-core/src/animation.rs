//! Spacing animation
//!
//! While enabled, the lights and cylinders sway around the spacing set in
//! [`SceneParams`]. The animated spacing replaces whatever X positions the
//! panel wrote earlier in the frame.

use crate::params::SceneParams;
use crate::scene::Scene;

/// Amplitude of the light spacing sway.
pub const LIGHT_SWAY: f32 = 0.4;
/// Amplitude of the cylinder spacing sway.
pub const CYLINDER_SWAY: f32 = 0.2;

/// Light spacing at `elapsed` seconds.
pub fn light_spacing_at(base: f32, elapsed: f32) -> f32 {
    base + (elapsed / 2.0).sin() * LIGHT_SWAY
}

/// Cylinder spacing at `elapsed` seconds.
pub fn cylinder_spacing_at(base: f32, elapsed: f32) -> f32 {
    base + (elapsed / 2.0).cos() * CYLINDER_SWAY
}

/// Apply the enabled animations for this frame.
pub fn apply(params: &SceneParams, scene: &mut Scene, elapsed: f32) {
    if params.animate_lights {
        scene.layout_lights_x(light_spacing_at(params.light_spacing, elapsed));
    }

    if params.animate_cylinders {
        scene.layout_cylinders_x(cylinder_spacing_at(params.cylinder_spacing, elapsed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SLOT_COUNT;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    fn animated(lights: bool, cylinders: bool) -> (SceneParams, Scene) {
        let params = SceneParams {
            animate_lights: lights,
            animate_cylinders: cylinders,
            ..Default::default()
        };
        let scene = Scene::build(&params);
        (params, scene)
    }

    #[test]
    fn test_lights_at_time_zero() {
        let (params, mut scene) = animated(true, false);

        apply(&params, &mut scene, 0.0);

        for i in 0..SLOT_COUNT {
            assert_relative_eq!(
                scene.lights[i].position.x,
                (i as f32 - 1.0) * params.light_spacing
            );
        }
    }

    #[test]
    fn test_lights_at_peak_sway() {
        let (params, mut scene) = animated(true, false);

        apply(&params, &mut scene, PI);

        for i in 0..SLOT_COUNT {
            assert_relative_eq!(
                scene.lights[i].position.x,
                (i as f32 - 1.0) * (params.light_spacing + 0.4),
                epsilon = 1e-5
            );
        }
    }

    #[test]
    fn test_cylinders_use_cosine() {
        let (params, mut scene) = animated(false, true);
        let lights_before = scene.lights;

        apply(&params, &mut scene, 0.0);

        for i in 0..SLOT_COUNT {
            assert_relative_eq!(
                scene.cylinders[i].position.x,
                (i as f32 - 1.0) * (params.cylinder_spacing + 0.2)
            );
        }
        assert_eq!(scene.lights, lights_before);
    }

    #[test]
    fn test_disabled_animation_is_noop() {
        let (params, mut scene) = animated(false, false);
        let before = scene.clone();

        for t in [0.0, 1.0, 7.5, 100.0] {
            apply(&params, &mut scene, t);
        }

        assert_eq!(scene, before);
    }

    #[test]
    fn test_animation_overrides_manual_position() {
        let (params, mut scene) = animated(true, false);
        scene.lights[0].position.x = 42.0;

        apply(&params, &mut scene, 0.0);

        assert_relative_eq!(scene.lights[0].position.x, -params.light_spacing);
    }
}
