//! Procedural geometry for the stage meshes

use std::f32::consts::TAU;

use glam::Vec3;

use spotlight_core::Geometry;

use crate::vertex::MeshVertex;

/// CPU mesh data for uploading to GPU.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Generate the triangles for a geometry description.
    pub fn from_geometry(geometry: &Geometry) -> Self {
        match *geometry {
            Geometry::Plane { width, height } => generate_plane(width, height),
            Geometry::Cylinder {
                radius_top,
                radius_bottom,
                height,
                radial_segments,
                height_segments,
            } => generate_cylinder(
                radius_top,
                radius_bottom,
                height,
                radial_segments.max(3),
                height_segments.max(1),
            ),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Rectangle in the XY plane centered at the origin, facing +Z.
fn generate_plane(width: f32, height: f32) -> MeshData {
    let hw = width / 2.0;
    let hh = height / 2.0;
    let vertices = vec![
        MeshVertex::new(Vec3::new(-hw, -hh, 0.0), Vec3::Z),
        MeshVertex::new(Vec3::new(hw, -hh, 0.0), Vec3::Z),
        MeshVertex::new(Vec3::new(hw, hh, 0.0), Vec3::Z),
        MeshVertex::new(Vec3::new(-hw, hh, 0.0), Vec3::Z),
    ];
    let indices = vec![0, 1, 2, 0, 2, 3];
    MeshData { vertices, indices }
}

/// Y-aligned cylinder centered at the origin with capped ends.
fn generate_cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    segments: u32,
    height_segments: u32,
) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let half_height = height / 2.0;

    // Side normals tilt with the radius difference
    let slope = (radius_bottom - radius_top) / height;

    for row in 0..=height_segments {
        let v = row as f32 / height_segments as f32;
        let radius = radius_top + (radius_bottom - radius_top) * v;
        let y = half_height - v * height;

        for seg in 0..=segments {
            let theta = TAU * seg as f32 / segments as f32;
            let (sin, cos) = theta.sin_cos();
            let position = Vec3::new(radius * sin, y, radius * cos);
            let normal = Vec3::new(sin, slope, cos).normalize();
            vertices.push(MeshVertex::new(position, normal));
        }
    }

    let stride = segments + 1;
    for row in 0..height_segments {
        for seg in 0..segments {
            let a = row * stride + seg;
            let b = (row + 1) * stride + seg;
            let c = b + 1;
            let d = a + 1;

            indices.extend_from_slice(&[a, b, d]);
            indices.extend_from_slice(&[b, c, d]);
        }
    }

    if radius_top > 0.0 {
        push_cap(&mut vertices, &mut indices, radius_top, half_height, segments, true);
    }
    if radius_bottom > 0.0 {
        push_cap(&mut vertices, &mut indices, radius_bottom, -half_height, segments, false);
    }

    MeshData { vertices, indices }
}

fn push_cap(
    vertices: &mut Vec<MeshVertex>,
    indices: &mut Vec<u32>,
    radius: f32,
    y: f32,
    segments: u32,
    top: bool,
) {
    let normal = if top { Vec3::Y } else { Vec3::NEG_Y };
    let center = vertices.len() as u32;
    vertices.push(MeshVertex::new(Vec3::new(0.0, y, 0.0), normal));

    let ring = vertices.len() as u32;
    for seg in 0..=segments {
        let theta = TAU * seg as f32 / segments as f32;
        let (sin, cos) = theta.sin_cos();
        vertices.push(MeshVertex::new(Vec3::new(radius * sin, y, radius * cos), normal));
    }

    for seg in 0..segments {
        if top {
            indices.extend_from_slice(&[center, ring + seg, ring + seg + 1]);
        } else {
            indices.extend_from_slice(&[center, ring + seg + 1, ring + seg]);
        }
    }
}
