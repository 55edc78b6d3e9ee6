//! Spotlights

use glam::Vec3;

use crate::config::LightConfig;

/// Colors of the three stage lights, paired by index with the cylinders.
pub const LIGHT_COLORS: [u32; 3] = [0xff0000, 0x00ff00, 0x0000ff];

/// Convert a `0xRRGGBB` color to linear RGB components in 0.0-1.0.
pub fn color_from_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// Cone-shaped light aimed at one of the cylinders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    /// World position
    pub position: Vec3,
    /// Index of the cylinder this light is aimed at
    pub target: usize,
    /// Light color (RGB, 0.0-1.0)
    pub color: Vec3,
    /// Half-angle of the cone in radians
    pub angle: f32,
    /// Intensity multiplier
    pub intensity: f32,
    /// Cutoff distance of the falloff (0 = no cutoff)
    pub distance: f32,
    /// Fraction of the cone that is softened (0.0-1.0)
    pub penumbra: f32,
    /// Falloff exponent along the distance
    pub decay: f32,
    /// Whether this light renders a shadow map
    pub cast_shadow: bool,
    /// Shadow map resolution (width = height)
    pub shadow_map_size: u32,
}

impl SpotLight {
    /// White light aimed at `target`, everything else from `config`.
    pub fn new(target: usize, config: &LightConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            target,
            color: Vec3::ONE,
            angle: config.angle,
            intensity: config.intensity,
            distance: config.distance,
            penumbra: config.penumbra,
            decay: config.decay,
            cast_shadow: true,
            shadow_map_size: config.shadow_map_size,
        }
    }

    /// Cosine of the outer cone angle.
    pub fn cone_cos(&self) -> f32 {
        self.angle.cos()
    }

    /// Cosine of the angle where the penumbra starts.
    pub fn penumbra_cos(&self) -> f32 {
        (self.angle * (1.0 - self.penumbra)).cos()
    }

    /// Normalized direction from the light toward `target_position`.
    ///
    /// Falls back to -Z when the light sits on its target.
    pub fn direction_to(&self, target_position: Vec3) -> Vec3 {
        let dir = (target_position - self.position).normalize_or_zero();
        if dir == Vec3::ZERO { Vec3::NEG_Z } else { dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(color_from_hex(0xff0000), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(color_from_hex(0x00ff00), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(color_from_hex(0x0000ff), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_penumbra_cos_without_penumbra_matches_cone() {
        let light = SpotLight::new(0, &LightConfig::default());
        assert_relative_eq!(light.penumbra_cos(), light.cone_cos());
    }

    #[test]
    fn test_direction_fallback_when_on_target() {
        let light = SpotLight::new(0, &LightConfig::default());
        assert_eq!(light.direction_to(light.position), Vec3::NEG_Z);

        let dir = light.direction_to(Vec3::new(0.0, 0.0, -4.0));
        assert_relative_eq!(dir.z, -1.0);
    }
}
