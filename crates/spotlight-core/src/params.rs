//! Tweakable scene parameters

use serde::{Deserialize, Serialize};

/// Parameters edited from the debug panel and read every frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneParams {
    /// Sway the lights along X.
    pub animate_lights: bool,
    /// Sway the cylinders along X.
    pub animate_cylinders: bool,
    /// Distance between neighbouring lights along X.
    pub light_spacing: f32,
    /// Distance between neighbouring cylinders along X.
    pub cylinder_spacing: f32,
    /// Offset of each light from its cylinder along Z.
    pub light_distance: f32,
}

impl SceneParams {
    pub const DEFAULT_LIGHT_SPACING: f32 = 2.54;
    pub const DEFAULT_CYLINDER_SPACING: f32 = 1.5;
    pub const DEFAULT_LIGHT_DISTANCE: f32 = 3.83;
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            animate_lights: false,
            animate_cylinders: false,
            light_spacing: Self::DEFAULT_LIGHT_SPACING,
            cylinder_spacing: Self::DEFAULT_CYLINDER_SPACING,
            light_distance: Self::DEFAULT_LIGHT_DISTANCE,
        }
    }
}
