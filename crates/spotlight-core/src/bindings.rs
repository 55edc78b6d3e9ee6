//! Debug panel bindings
//!
//! The panel is a fixed set of controls. Numeric controls are described by
//! [`NumericControl`] (label, range, step); every edit goes through one of the
//! named handlers below, which clamp to the control's range and write the
//! scene state in place.

use std::f32::consts::PI;
use std::ops::RangeInclusive;

use crate::material::StandardMaterial;
use crate::params::SceneParams;
use crate::scene::Scene;

/// A slider bound to one numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericControl {
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl NumericControl {
    pub const fn new(label: &'static str, min: f32, max: f32, step: f32) -> Self {
        Self {
            label,
            min,
            max,
            step,
        }
    }

    /// Clamp a value into the control's range.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    pub fn range(&self) -> RangeInclusive<f32> {
        self.min..=self.max
    }
}

pub const MATERIAL_METALNESS: NumericControl =
    NumericControl::new("material metalness", 0.0, 1.0, 0.001);
pub const MATERIAL_ROUGHNESS: NumericControl =
    NumericControl::new("material roughness", 0.0, 1.0, 0.001);

pub const SPOT_ANGLE: NumericControl = NumericControl::new("angle", 0.0, PI, 0.01);
pub const SPOT_INTENSITY: NumericControl = NumericControl::new("intensity", 0.0, 1.0, 0.01);
pub const SPOT_DISTANCE: NumericControl = NumericControl::new("distance", 0.01, 50.0, 0.1);

pub const LIGHT_SPACING: NumericControl = NumericControl::new("Light Spacing", 0.0, 5.0, 0.01);
pub const LIGHT_DISTANCE: NumericControl = NumericControl::new("Light Distance", 0.0, 5.0, 0.01);
pub const CYLINDER_SPACING: NumericControl =
    NumericControl::new("Cylinder Spacing", 0.0, 5.0, 0.01);

pub const LIGHT_FOLDERS: [&str; 3] = ["Red Light", "Green Light", "Blue Light"];
pub const POSITION_FOLDER: &str = "Light Position Controls";
pub const ANIMATION_FOLDER: &str = "Animation Controls";

pub const ANIMATE_LIGHTS_LABEL: &str = "Animate Lights";
pub const ANIMATE_CYLINDERS_LABEL: &str = "Animate Cylinders";
pub const SHOW_AXES_LABEL: &str = "Show Axes";

pub fn set_material_metalness(material: &mut StandardMaterial, value: f32) {
    material.metalness = MATERIAL_METALNESS.clamp(value);
}

pub fn set_material_roughness(material: &mut StandardMaterial, value: f32) {
    material.roughness = MATERIAL_ROUGHNESS.clamp(value);
}

pub fn set_light_angle(scene: &mut Scene, index: usize, value: f32) {
    if let Some(light) = light_mut(scene, index) {
        light.angle = SPOT_ANGLE.clamp(value);
    }
}

pub fn set_light_intensity(scene: &mut Scene, index: usize, value: f32) {
    if let Some(light) = light_mut(scene, index) {
        light.intensity = SPOT_INTENSITY.clamp(value);
    }
}

/// Set the falloff cutoff distance of one light.
pub fn set_light_falloff_distance(scene: &mut Scene, index: usize, value: f32) {
    if let Some(light) = light_mut(scene, index) {
        light.distance = SPOT_DISTANCE.clamp(value);
    }
}

/// Respace the lights along X. Cylinders are left alone.
pub fn set_light_spacing(params: &mut SceneParams, scene: &mut Scene, value: f32) {
    params.light_spacing = LIGHT_SPACING.clamp(value);
    scene.layout_lights_x(params.light_spacing);
}

/// Move every light `value` in front of its cylinder along Z.
pub fn set_light_distance(params: &mut SceneParams, scene: &mut Scene, value: f32) {
    params.light_distance = LIGHT_DISTANCE.clamp(value);
    scene.layout_lights_z(params.light_distance);
}

/// Respace the cylinders along X. Lights are left alone.
pub fn set_cylinder_spacing(params: &mut SceneParams, scene: &mut Scene, value: f32) {
    params.cylinder_spacing = CYLINDER_SPACING.clamp(value);
    scene.layout_cylinders_x(params.cylinder_spacing);
}

pub fn set_animate_lights(params: &mut SceneParams, enabled: bool) {
    params.animate_lights = enabled;
}

pub fn set_animate_cylinders(params: &mut SceneParams, enabled: bool) {
    params.animate_cylinders = enabled;
}

pub fn set_axes_visible(scene: &mut Scene, visible: bool) {
    scene.axes.visible = visible;
}

fn light_mut(scene: &mut Scene, index: usize) -> Option<&mut crate::light::SpotLight> {
    let light = scene.lights.get_mut(index);
    if light.is_none() {
        tracing::warn!("Ignoring edit for unknown light {}", index);
    }
    light
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{SLOT_COUNT, slot_offset};
    use approx::assert_relative_eq;

    fn stage() -> (SceneParams, Scene) {
        let params = SceneParams::default();
        let scene = Scene::build(&params);
        (params, scene)
    }

    #[test]
    fn test_light_spacing_moves_only_lights() {
        let (mut params, mut scene) = stage();
        let cylinders_before = scene.cylinders;

        set_light_spacing(&mut params, &mut scene, 4.0);

        assert_eq!(params.light_spacing, 4.0);
        for i in 0..SLOT_COUNT {
            assert_relative_eq!(scene.lights[i].position.x, slot_offset(i, 4.0));
        }
        assert_eq!(scene.cylinders, cylinders_before);
    }

    #[test]
    fn test_cylinder_spacing_moves_only_cylinders() {
        let (mut params, mut scene) = stage();
        let lights_before = scene.lights;

        set_cylinder_spacing(&mut params, &mut scene, 0.75);

        for i in 0..SLOT_COUNT {
            assert_relative_eq!(scene.cylinders[i].position.x, (i as f32 - 1.0) * 0.75);
        }
        assert_eq!(scene.lights, lights_before);
    }

    #[test]
    fn test_light_distance_offsets_from_cylinder() {
        let (mut params, mut scene) = stage();
        scene.cylinders[2].position.z = -1.0;

        set_light_distance(&mut params, &mut scene, 2.0);

        for i in 0..SLOT_COUNT {
            assert_relative_eq!(
                scene.lights[i].position.z,
                scene.cylinders[i].position.z + 2.0
            );
        }
    }

    #[test]
    fn test_numeric_edits_are_clamped() {
        let (mut params, mut scene) = stage();

        set_light_spacing(&mut params, &mut scene, 12.0);
        assert_eq!(params.light_spacing, 5.0);

        set_material_metalness(&mut scene.material, -0.5);
        assert_eq!(scene.material.metalness, 0.0);

        set_material_roughness(&mut scene.material, 0.25);
        assert_eq!(scene.material.roughness, 0.25);

        set_light_falloff_distance(&mut scene, 1, 0.0);
        assert_eq!(scene.lights[1].distance, 0.01);

        set_light_angle(&mut scene, 0, 4.0);
        assert_relative_eq!(scene.lights[0].angle, PI);
    }

    #[test]
    fn test_per_light_edit_touches_one_light() {
        let (_, mut scene) = stage();

        set_light_intensity(&mut scene, 2, 0.5);

        assert_eq!(scene.lights[2].intensity, 0.5);
        assert_eq!(scene.lights[0].intensity, 1.0);
        assert_eq!(scene.lights[1].intensity, 1.0);
    }

    #[test]
    fn test_unknown_light_index_is_ignored() {
        let (_, mut scene) = stage();
        let before = scene.clone();

        set_light_intensity(&mut scene, SLOT_COUNT, 0.1);

        assert_eq!(scene, before);
    }

    #[test]
    fn test_toggles() {
        let (mut params, mut scene) = stage();

        set_animate_lights(&mut params, true);
        set_animate_cylinders(&mut params, true);
        set_axes_visible(&mut scene, true);

        assert!(params.animate_lights);
        assert!(params.animate_cylinders);
        assert!(scene.axes.visible);
    }

    #[test]
    fn test_control_table() {
        assert_eq!(SPOT_ANGLE.range(), 0.0..=PI);
        assert_eq!(SPOT_DISTANCE.min, 0.01);
        assert_eq!(MATERIAL_METALNESS.step, 0.001);
        assert_eq!(LIGHT_FOLDERS.len(), SLOT_COUNT);
    }
}
