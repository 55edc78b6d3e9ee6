//! Material uniform

use bytemuck::{Pod, Zeroable};

use spotlight_core::StandardMaterial;

/// Shared material parameters (32 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MaterialUniform {
    /// Base color (RGB), alpha
    pub base_color: [f32; 4],
    /// x = roughness, y = metalness
    pub params: [f32; 4],
}

impl Default for MaterialUniform {
    fn default() -> Self {
        Self::from(&StandardMaterial::default())
    }
}

impl From<&StandardMaterial> for MaterialUniform {
    fn from(material: &StandardMaterial) -> Self {
        let c = material.color;
        Self {
            base_color: [c.x, c.y, c.z, 1.0],
            params: [
                material.roughness.clamp(0.0, 1.0),
                material.metalness.clamp(0.0, 1.0),
                0.0,
                0.0,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_packing() {
        let material = StandardMaterial::default()
            .with_roughness(0.7)
            .with_metalness(0.25);
        let uniform = MaterialUniform::from(&material);

        assert_eq!(uniform.base_color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(uniform.params[0], 0.7);
        assert_eq!(uniform.params[1], 0.25);
    }
}
