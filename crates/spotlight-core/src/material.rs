//! Shared surface material

use glam::Vec3;

/// Metallic-roughness material shared by every mesh in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardMaterial {
    /// Base color (linear RGB, 0.0-1.0)
    pub color: Vec3,
    /// Surface roughness (0.0 = mirror, 1.0 = fully diffuse)
    pub roughness: f32,
    /// Metalness (0.0 = dielectric, 1.0 = metal)
    pub metalness: f32,
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            roughness: 1.0,
            metalness: 0.0,
        }
    }
}

impl StandardMaterial {
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }
}
