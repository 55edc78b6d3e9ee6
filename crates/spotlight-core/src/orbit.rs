//! Damped orbit controls
//!
//! The camera orbits `target` on a sphere. Pointer input accumulates into
//! pending rotation/pan deltas; [`OrbitControls::update`] applies them once
//! per frame. With damping enabled each update applies `damping_factor` of
//! the pending delta and keeps the rest, so motion eases out instead of
//! stopping dead.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use crate::camera::PerspectiveCamera;
use crate::config::OrbitConfig;

const EPS: f32 = 1e-6;
/// Pending deltas below this magnitude are dropped.
const SETTLE_EPS: f32 = 1e-6;

/// Spherical coordinates around the Y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Spherical {
    radius: f32,
    /// Polar angle from +Y
    phi: f32,
    /// Azimuth around +Y, measured from +Z
    theta: f32,
}

impl Spherical {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self {
                radius: 0.0,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

/// Orbit navigation around a target point.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    theta_delta: f32,
    phi_delta: f32,
    pan_offset: Vec3,
    scale: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(&OrbitConfig::default())
    }
}

impl OrbitControls {
    pub fn new(config: &OrbitConfig) -> Self {
        Self {
            target: Vec3::ZERO,
            enable_damping: config.enable_damping,
            damping_factor: config.damping_factor,
            rotate_speed: config.rotate_speed,
            zoom_speed: config.zoom_speed,
            pan_speed: config.pan_speed,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            theta_delta: 0.0,
            phi_delta: 0.0,
            pan_offset: Vec3::ZERO,
            scale: 1.0,
        }
    }

    /// Queue a rotation from a pointer drag of `delta` pixels.
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        self.theta_delta -= TAU * delta.x / height * self.rotate_speed;
        self.phi_delta -= TAU * delta.y / height * self.rotate_speed;
    }

    /// Queue a screen-space pan from a pointer drag of `delta` pixels.
    pub fn pan(&mut self, delta: Vec2, viewport_height: f32, camera: &PerspectiveCamera) {
        let height = viewport_height.max(1.0);
        let distance = (camera.position - self.target).length();
        // Distance covered by the half-height of the view at the target.
        let target_distance = distance * (camera.fov_degrees.to_radians() / 2.0).tan();

        let (right, up) = camera.basis();
        let left = -right * (2.0 * delta.x * target_distance / height) * self.pan_speed;
        let upward = up * (2.0 * delta.y * target_distance / height) * self.pan_speed;
        self.pan_offset += left + upward;
    }

    /// Queue a dolly from a scroll of `amount` (positive = toward the target).
    pub fn zoom(&mut self, amount: f32) {
        if amount == 0.0 {
            return;
        }
        let step = 0.95_f32.powf(self.zoom_speed);
        if amount > 0.0 {
            self.scale *= step;
        } else {
            self.scale /= step;
        }
    }

    /// Whether there is input left to apply.
    pub fn is_moving(&self) -> bool {
        self.theta_delta != 0.0 || self.phi_delta != 0.0 || self.pan_offset != Vec3::ZERO || self.scale != 1.0
    }

    /// Apply pending input to the camera. Returns true if the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        if !self.is_moving() {
            return false;
        }

        let offset = camera.position - self.target;
        let mut spherical = Spherical::from_offset(offset);

        let weight = if self.enable_damping { self.damping_factor } else { 1.0 };
        spherical.theta += self.theta_delta * weight;
        spherical.phi += self.phi_delta * weight;

        let min_phi = self.min_polar_angle.max(EPS);
        let max_phi = self.max_polar_angle.min(PI - EPS);
        spherical.phi = spherical.phi.clamp(min_phi, max_phi);
        spherical.radius = (spherical.radius * self.scale).clamp(self.min_distance, self.max_distance);

        self.target += self.pan_offset * weight;

        let previous = camera.position;
        camera.position = self.target + spherical.to_offset();
        camera.target = self.target;

        if self.enable_damping {
            self.theta_delta *= 1.0 - self.damping_factor;
            self.phi_delta *= 1.0 - self.damping_factor;
            self.pan_offset *= 1.0 - self.damping_factor;
            self.settle();
        } else {
            self.theta_delta = 0.0;
            self.phi_delta = 0.0;
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;

        camera.position.distance_squared(previous) > EPS * EPS
    }

    fn settle(&mut self) {
        if self.theta_delta.abs() < SETTLE_EPS {
            self.theta_delta = 0.0;
        }
        if self.phi_delta.abs() < SETTLE_EPS {
            self.phi_delta = 0.0;
        }
        if self.pan_offset.length_squared() < SETTLE_EPS * SETTLE_EPS {
            self.pan_offset = Vec3::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CameraConfig;
    use approx::assert_relative_eq;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::from_config(&CameraConfig::default(), 1.5)
    }

    #[test]
    fn test_update_without_input_is_noop() {
        let mut controls = OrbitControls::default();
        let mut cam = camera();
        let before = cam.clone();

        for _ in 0..10 {
            assert!(!controls.update(&mut cam));
        }
        assert_eq!(cam, before);
    }

    #[test]
    fn test_spherical_round_trip() {
        let offset = Vec3::new(3.0, 6.0, 10.0);
        let back = Spherical::from_offset(offset).to_offset();
        assert_relative_eq!(back.x, offset.x, epsilon = 1e-4);
        assert_relative_eq!(back.y, offset.y, epsilon = 1e-4);
        assert_relative_eq!(back.z, offset.z, epsilon = 1e-4);
    }

    #[test]
    fn test_damped_rotation_eases_out() {
        let mut controls = OrbitControls::default();
        let mut cam = camera();
        let radius = cam.position.length();

        controls.rotate(Vec2::new(100.0, 0.0), 600.0);

        let first = cam.position;
        controls.update(&mut cam);
        let step_one = cam.position.distance(first);

        let second = cam.position;
        controls.update(&mut cam);
        let step_two = cam.position.distance(second);

        assert!(step_one > 0.0);
        assert!(step_two < step_one);
        assert_relative_eq!(cam.position.length(), radius, epsilon = 1e-3);
    }

    #[test]
    fn test_damping_converges_to_full_rotation() {
        let mut controls = OrbitControls::default();
        let mut cam = camera();
        let start = Spherical::from_offset(cam.position);

        controls.rotate(Vec2::new(60.0, 0.0), 600.0);
        let expected_theta = start.theta - TAU * 60.0 / 600.0;

        for _ in 0..2000 {
            controls.update(&mut cam);
        }

        assert!(!controls.is_moving());
        let end = Spherical::from_offset(cam.position);
        assert_relative_eq!(end.theta, expected_theta, epsilon = 1e-3);
    }

    #[test]
    fn test_undamped_rotation_applies_at_once() {
        let mut controls = OrbitControls::new(&OrbitConfig {
            enable_damping: false,
            ..Default::default()
        });
        let mut cam = camera();

        controls.rotate(Vec2::new(0.0, 30.0), 600.0);
        assert!(controls.update(&mut cam));
        assert!(!controls.is_moving());
    }

    #[test]
    fn test_polar_angle_is_clamped() {
        let mut controls = OrbitControls::new(&OrbitConfig {
            enable_damping: false,
            ..Default::default()
        });
        let mut cam = camera();
        let radius = cam.position.length();

        // Drag far enough to flip over the pole
        controls.rotate(Vec2::new(0.0, 5000.0), 600.0);
        controls.update(&mut cam);

        // Parked just short of the top pole instead of wrapping past it
        assert!(cam.position.y > 0.0);
        assert_relative_eq!(cam.position.y, radius, epsilon = 1e-3);
        assert!(cam.position.x.abs() < 1e-3);
        assert!(cam.position.z.abs() < 1e-3);
    }

    #[test]
    fn test_zoom_changes_radius() {
        let mut controls = OrbitControls::new(&OrbitConfig {
            enable_damping: false,
            ..Default::default()
        });
        let mut cam = camera();
        let radius = cam.position.length();

        controls.zoom(1.0);
        controls.update(&mut cam);
        assert_relative_eq!(cam.position.length(), radius * 0.95, epsilon = 1e-4);

        controls.zoom(-1.0);
        controls.update(&mut cam);
        assert_relative_eq!(cam.position.length(), radius, epsilon = 1e-4);
    }

    #[test]
    fn test_pan_moves_target_with_camera() {
        let mut controls = OrbitControls::new(&OrbitConfig {
            enable_damping: false,
            ..Default::default()
        });
        let mut cam = camera();
        let offset_before = cam.position - controls.target;

        controls.pan(Vec2::new(50.0, 0.0), 600.0, &cam);
        controls.update(&mut cam);

        assert!(controls.target != Vec3::ZERO);
        assert_eq!(cam.target, controls.target);
        let offset_after = cam.position - controls.target;
        assert_relative_eq!(offset_after.x, offset_before.x, epsilon = 1e-4);
        assert_relative_eq!(offset_after.y, offset_before.y, epsilon = 1e-4);
        assert_relative_eq!(offset_after.z, offset_before.z, epsilon = 1e-4);
    }
}
