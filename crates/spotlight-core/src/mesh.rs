//! Renderable meshes and their geometry descriptions

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Procedural geometry shapes used by the stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Flat rectangle in the XY plane facing +Z
    Plane { width: f32, height: f32 },
    /// Y-aligned cylinder centered at the origin
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
        height_segments: u32,
    },
}

/// A mesh instance placed in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mesh {
    pub geometry: Geometry,
    pub position: Vec3,
    /// Euler rotation (XYZ order, radians)
    pub rotation: Vec3,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Mesh {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_cast_shadow(mut self, cast: bool) -> Self {
        self.cast_shadow = cast;
        self
    }

    pub fn with_receive_shadow(mut self, receive: bool) -> Self {
        self.receive_shadow = receive;
        self
    }

    /// World transform of this mesh.
    pub fn transform(&self) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_rotation_translation(rotation, self.position)
    }
}
