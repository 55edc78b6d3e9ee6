//! Stage scene graph
//!
//! The scene is fixed: a ground plane, a back plane, three cylinders and
//! three spotlights, all sharing one material. Lights and cylinders are
//! paired by index, and index 1 sits at x = 0.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::config::LightConfig;
use crate::light::{LIGHT_COLORS, SpotLight, color_from_hex};
use crate::material::StandardMaterial;
use crate::mesh::{Geometry, Mesh};
use crate::params::SceneParams;

/// Number of cylinder/light pairs on the stage.
pub const SLOT_COUNT: usize = 3;

/// Roughness the shared material starts with.
pub const INITIAL_ROUGHNESS: f32 = 0.7;

pub const PLANE_SIZE: f32 = 5.0;
pub const CYLINDER_RADIUS: f32 = 0.3;
pub const CYLINDER_HEIGHT: f32 = 1.0;
pub const CYLINDER_RADIAL_SEGMENTS: u32 = 64;

/// X offset of slot `index` for the given spacing; slot 1 is centered.
pub fn slot_offset(index: usize, spacing: f32) -> f32 {
    (index as f32 - 1.0) * spacing
}

/// RGB axis lines drawn at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxesHelper {
    /// Length of each axis line
    pub size: f32,
    pub visible: bool,
}

impl Default for AxesHelper {
    fn default() -> Self {
        Self {
            size: 1.0,
            visible: false,
        }
    }
}

/// The stage scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub ground: Mesh,
    pub back: Mesh,
    pub cylinders: [Mesh; SLOT_COUNT],
    pub lights: [SpotLight; SLOT_COUNT],
    pub material: StandardMaterial,
    pub axes: AxesHelper,
}

impl Scene {
    /// Build the stage with the default light settings.
    pub fn build(params: &SceneParams) -> Self {
        Self::build_with(params, &LightConfig::default())
    }

    /// Build the stage, taking light defaults from `light_config`.
    pub fn build_with(params: &SceneParams, light_config: &LightConfig) -> Self {
        let plane = Geometry::Plane {
            width: PLANE_SIZE,
            height: PLANE_SIZE,
        };

        let ground = Mesh::new(plane)
            .with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0))
            .with_position(Vec3::new(0.0, -0.5, 0.0))
            .with_receive_shadow(true);

        let back = Mesh::new(plane)
            .with_position(Vec3::new(0.0, 2.0, -2.5))
            .with_receive_shadow(true);

        let cylinder = Geometry::Cylinder {
            radius_top: CYLINDER_RADIUS,
            radius_bottom: CYLINDER_RADIUS,
            height: CYLINDER_HEIGHT,
            radial_segments: CYLINDER_RADIAL_SEGMENTS,
            height_segments: 1,
        };
        let cylinders: [Mesh; SLOT_COUNT] = std::array::from_fn(|i| {
            Mesh::new(cylinder)
                .with_position(Vec3::new(slot_offset(i, params.cylinder_spacing), 0.0, 0.0))
                .with_cast_shadow(true)
        });

        let lights: [SpotLight; SLOT_COUNT] = std::array::from_fn(|i| {
            let anchor = cylinders[i].position;
            let mut light = SpotLight::new(i, light_config);
            light.position = Vec3::new(
                slot_offset(i, params.light_spacing),
                anchor.y,
                anchor.z + params.light_distance,
            );
            light.color = color_from_hex(LIGHT_COLORS[i]);
            light
        });

        let scene = Self {
            ground,
            back,
            cylinders,
            lights,
            material: StandardMaterial::default().with_roughness(INITIAL_ROUGHNESS),
            axes: AxesHelper::default(),
        };

        tracing::debug!(
            "Built stage: {} cylinders, {} lights, cylinder spacing {}, light spacing {}",
            scene.cylinders.len(),
            scene.lights.len(),
            params.cylinder_spacing,
            params.light_spacing
        );

        scene
    }

    /// All meshes in draw order (planes first).
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        [&self.ground, &self.back]
            .into_iter()
            .chain(self.cylinders.iter())
    }

    /// World position a light is aimed at.
    pub fn light_target(&self, index: usize) -> Option<Vec3> {
        let light = self.lights.get(index)?;
        self.cylinders.get(light.target).map(|c| c.position)
    }

    /// Spread the lights along X with the given spacing.
    pub fn layout_lights_x(&mut self, spacing: f32) {
        for (i, light) in self.lights.iter_mut().enumerate() {
            light.position.x = slot_offset(i, spacing);
        }
    }

    /// Spread the cylinders along X with the given spacing.
    pub fn layout_cylinders_x(&mut self, spacing: f32) {
        for (i, cylinder) in self.cylinders.iter_mut().enumerate() {
            cylinder.position.x = slot_offset(i, spacing);
        }
    }

    /// Place each light `distance` in front of its cylinder along Z.
    pub fn layout_lights_z(&mut self, distance: f32) {
        for (light, cylinder) in self.lights.iter_mut().zip(self.cylinders.iter()) {
            light.position.z = cylinder.position.z + distance;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_build_positions_follow_default_spacing() {
        let scene = Scene::build(&SceneParams::default());

        for i in 0..SLOT_COUNT {
            let k = i as f32 - 1.0;
            assert_relative_eq!(scene.cylinders[i].position.x, k * 1.5);
            assert_relative_eq!(scene.lights[i].position.x, k * 2.54);
            assert_relative_eq!(scene.lights[i].position.z, 3.83);
            assert_relative_eq!(scene.lights[i].position.y, scene.cylinders[i].position.y);
        }
    }

    #[test]
    fn test_lights_are_paired_with_cylinders() {
        let scene = Scene::build(&SceneParams::default());

        let colors: Vec<Vec3> = scene.lights.iter().map(|l| l.color).collect();
        assert_eq!(colors, vec![Vec3::X, Vec3::Y, Vec3::Z]);

        for i in 0..SLOT_COUNT {
            assert_eq!(scene.lights[i].target, i);
            assert_eq!(scene.light_target(i), Some(scene.cylinders[i].position));
            assert!(scene.lights[i].cast_shadow);
            assert_eq!(scene.lights[i].shadow_map_size, 2048);
        }
        assert_eq!(scene.light_target(SLOT_COUNT), None);
    }

    #[test]
    fn test_planes_and_material() {
        let scene = Scene::build(&SceneParams::default());

        assert!(scene.ground.receive_shadow);
        assert!(scene.back.receive_shadow);
        assert!(!scene.ground.cast_shadow);
        assert_eq!(scene.ground.position, Vec3::new(0.0, -0.5, 0.0));
        assert_relative_eq!(scene.ground.rotation.x, -FRAC_PI_2);
        assert_eq!(scene.back.position, Vec3::new(0.0, 2.0, -2.5));

        assert_relative_eq!(scene.material.roughness, 0.7);
        assert_relative_eq!(scene.material.metalness, 0.0);
        assert!(!scene.axes.visible);
    }

    #[test]
    fn test_cylinders_share_geometry() {
        let scene = Scene::build(&SceneParams::default());

        assert!(matches!(
            scene.cylinders[0].geometry,
            Geometry::Cylinder {
                radial_segments: 64,
                ..
            }
        ));
        assert!(scene.cylinders.iter().all(|c| c.geometry == scene.cylinders[0].geometry));
        assert!(scene.cylinders.iter().all(|c| c.cast_shadow));
        assert_eq!(scene.meshes().count(), 5);
    }

    #[test]
    fn test_build_is_deterministic() {
        let params = SceneParams::default();
        assert_eq!(Scene::build(&params), Scene::build(&params));
    }
}
