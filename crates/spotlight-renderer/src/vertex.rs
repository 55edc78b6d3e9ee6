//! Vertex and instance formats

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use spotlight_core::Mesh;

/// Vertex with position and normal for lit geometry
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: 12,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Vertex with position and color for unlit lines
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PositionColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl PositionColorVertex {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: 12,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Per-instance mesh data for GPU instancing
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    /// Model transformation matrix (4x4)
    pub model: [[f32; 4]; 4],
    /// x = casts shadow, y = receives shadow (1.0 or 0.0)
    pub shadow_flags: [f32; 4],
}

impl MeshInstance {
    pub fn new(transform: Mat4, cast_shadow: bool, receive_shadow: bool) -> Self {
        Self {
            model: transform.to_cols_array_2d(),
            shadow_flags: [flag(cast_shadow), flag(receive_shadow), 0.0, 0.0],
        }
    }

    pub fn casts_shadow(&self) -> bool {
        self.shadow_flags[0] > 0.5
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                // model matrix (4 columns)
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: 16,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: 32,
                    shader_location: 4,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: 48,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x4,
                },
                // shadow flags
                wgpu::VertexAttribute {
                    offset: 64,
                    shader_location: 6,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

impl From<&Mesh> for MeshInstance {
    fn from(mesh: &Mesh) -> Self {
        Self::new(mesh.transform(), mesh.cast_shadow, mesh.receive_shadow)
    }
}

fn flag(value: bool) -> f32 {
    if value { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spotlight_core::Geometry;

    #[test]
    fn test_sizes_match_layouts() {
        assert_eq!(std::mem::size_of::<MeshVertex>(), 24);
        assert_eq!(std::mem::size_of::<MeshInstance>(), 80);
        assert_eq!(MeshInstance::layout().array_stride, 80);
    }

    #[test]
    fn test_instance_from_mesh() {
        let mesh = Mesh::new(Geometry::Plane {
            width: 1.0,
            height: 1.0,
        })
        .with_position(Vec3::new(1.0, 2.0, 3.0))
        .with_receive_shadow(true);

        let instance = MeshInstance::from(&mesh);
        assert!(!instance.casts_shadow());
        assert_eq!(instance.shadow_flags[1], 1.0);
        assert_eq!(instance.model[3], [1.0, 2.0, 3.0, 1.0]);
    }
}
