//! Stage configuration
//!
//! Every field has a default equal to the fixed stage values, so a partial
//! configuration file only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::params::SceneParams;
use crate::resize::MAX_PIXEL_RATIO;

/// Perspective camera settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    /// Initial camera position
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 27.0,
            near_plane: 0.1,
            far_plane: 200.0,
            position: [3.0, 6.0, 10.0],
        }
    }
}

/// Initial values for the three spotlights
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightConfig {
    pub intensity: f32,
    pub distance: f32,
    /// Cone half-angle in radians
    pub angle: f32,
    pub penumbra: f32,
    pub decay: f32,
    pub shadow_map_size: u32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            distance: 30.0,
            angle: 2.41,
            penumbra: 0.0,
            decay: 2.0,
            shadow_map_size: 2048,
        }
    }
}

/// Orbit navigation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::MAX,
        }
    }
}

/// Complete stage configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StageConfig {
    /// Configuration format version
    pub version: u32,
    pub camera: CameraConfig,
    pub params: SceneParams,
    pub lights: LightConfig,
    pub controls: OrbitConfig,
    /// Upper bound applied to the device pixel ratio
    pub max_pixel_ratio: f32,
}

impl StageConfig {
    /// Current configuration version
    pub const CURRENT_VERSION: u32 = 1;
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            camera: CameraConfig::default(),
            params: SceneParams::default(),
            lights: LightConfig::default(),
            controls: OrbitConfig::default(),
            max_pixel_ratio: MAX_PIXEL_RATIO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: StageConfig = ron::from_str("(params: (light_spacing: 3.0))").unwrap();

        assert_eq!(config.params.light_spacing, 3.0);
        assert_eq!(config.params.cylinder_spacing, SceneParams::DEFAULT_CYLINDER_SPACING);
        assert_eq!(config.camera, CameraConfig::default());
        assert_eq!(config.max_pixel_ratio, MAX_PIXEL_RATIO);
        assert_eq!(config.version, StageConfig::CURRENT_VERSION);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: StageConfig = ron::from_str("()").unwrap();
        assert_eq!(config, StageConfig::default());
    }
}
