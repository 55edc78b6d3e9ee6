//! Spotlight uniforms with shadow mapping support

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use spotlight_core::{Scene, SpotLight};

use crate::constants::{lighting, shadow};

/// Per-light data sent to GPU (128 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SpotLightUniform {
    /// Light view-projection matrix for shadow mapping
    pub view_proj: [[f32; 4]; 4],
    /// xyz = world position, w = cutoff distance (0 = infinite)
    pub position_range: [f32; 4],
    /// xyz = normalized direction, w = cos(outer cone angle)
    pub direction_cone: [f32; 4],
    /// Light color (RGB) and intensity (A)
    pub color_intensity: [f32; 4],
    /// x = cos(penumbra start), y = decay, z = shadow enabled, w = shadow bias
    pub params: [f32; 4],
}

impl Default for SpotLightUniform {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position_range: [0.0; 4],
            direction_cone: [0.0, 0.0, -1.0, 1.0],
            color_intensity: [0.0; 4],
            params: [1.0, 2.0, 0.0, shadow::DEFAULT_BIAS],
        }
    }
}

impl SpotLightUniform {
    /// Pack a spotlight aimed at `target`.
    pub fn new(light: &SpotLight, target: Vec3) -> Self {
        let direction = light.direction_to(target);
        let position = light.position;
        let color = light.color;

        Self {
            view_proj: shadow_view_proj(light, target).to_cols_array_2d(),
            position_range: [position.x, position.y, position.z, light.distance],
            direction_cone: [direction.x, direction.y, direction.z, light.cone_cos()],
            color_intensity: [color.x, color.y, color.z, light.intensity],
            params: [
                light.penumbra_cos(),
                light.decay,
                if light.cast_shadow { 1.0 } else { 0.0 },
                shadow::DEFAULT_BIAS,
            ],
        }
    }
}

/// All lights of the stage plus frame-wide parameters (416 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LightsUniform {
    pub lights: [SpotLightUniform; lighting::MAX_SPOT_LIGHTS],
    /// Ambient color (RGB) and strength (A)
    pub ambient: [f32; 4],
    /// x = light count, yzw unused
    pub frame: [f32; 4],
}

impl Default for LightsUniform {
    fn default() -> Self {
        let [r, g, b] = lighting::AMBIENT_COLOR;
        Self {
            lights: [SpotLightUniform::default(); lighting::MAX_SPOT_LIGHTS],
            ambient: [r, g, b, lighting::AMBIENT_STRENGTH],
            frame: [0.0; 4],
        }
    }
}

impl LightsUniform {
    /// Collect the scene's spotlights.
    pub fn from_scene(scene: &Scene) -> Self {
        let mut uniform = Self::default();
        let mut count = 0;

        for (index, (slot, light)) in uniform.lights.iter_mut().zip(&scene.lights).enumerate() {
            let Some(target) = scene.light_target(index) else {
                continue;
            };
            *slot = SpotLightUniform::new(light, target);
            count += 1;
        }

        uniform.frame = [count as f32, 0.0, 0.0, 0.0];
        uniform
    }

    pub fn light_count(&self) -> usize {
        self.frame[0] as usize
    }

    /// View-projection of one light, for the shadow pass.
    pub fn shadow_view_proj(&self, index: usize) -> Option<[[f32; 4]; 4]> {
        if index >= self.light_count() {
            return None;
        }
        self.lights.get(index).map(|light| light.view_proj)
    }
}

/// Perspective frustum of the light's cone, looking at its target.
pub fn shadow_view_proj(light: &SpotLight, target: Vec3) -> Mat4 {
    let direction = light.direction_to(target);
    let up = if direction.cross(Vec3::Y).length_squared() < 1e-6 {
        Vec3::Z
    } else {
        Vec3::Y
    };

    let view = Mat4::look_at_rh(light.position, light.position + direction, up);
    let fov = (2.0 * light.angle).min(shadow::MAX_FOV_DEGREES.to_radians());
    let far = if light.distance > 0.0 {
        light.distance
    } else {
        shadow::DEFAULT_FAR
    };
    let proj = Mat4::perspective_rh(fov, 1.0, shadow::NEAR, far);
    proj * view
}
