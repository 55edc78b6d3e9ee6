//! Camera uniform for the main pass

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use spotlight_core::PerspectiveCamera;

/// Camera uniform buffer data sent to GPU (80 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Eye position (xyz), w unused
    pub position: [f32; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl CameraUniform {
    pub fn from_camera(camera: &PerspectiveCamera) -> Self {
        let eye = camera.position;
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            position: [eye.x, eye.y, eye.z, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    #[test]
    fn test_uniform_matches_camera() {
        let mut camera = PerspectiveCamera::new(27.0, 1.5, 0.1, 200.0);
        camera.position = Vec3::new(3.0, 6.0, 10.0);
        camera.update_projection_matrix();

        let uniform = CameraUniform::from_camera(&camera);
        assert_eq!(uniform.position, [3.0, 6.0, 10.0, 1.0]);
        assert_eq!(
            Mat4::from_cols_array_2d(&uniform.view_proj),
            camera.view_projection()
        );

        // The target projects to the center of the screen
        let clip = camera.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((clip.x / clip.w).abs() < 1e-5);
        assert!((clip.y / clip.w).abs() < 1e-5);
    }
}
