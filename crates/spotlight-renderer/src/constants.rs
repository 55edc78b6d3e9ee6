//! Renderer constants.

/// Viewport render target settings.
pub mod viewport {
    /// Color format of the offscreen viewport texture. egui samples native
    /// textures as linear, so the hardware sRGB view does the encoding.
    pub const COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;
    /// Depth buffer format for the main pass.
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
    /// Background clear color (linear RGB).
    pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
}

/// Spotlight shadow settings.
pub mod shadow {
    /// Depth format of the shadow map array.
    pub const SHADOW_MAP_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
    /// Smallest and largest shadow map edge accepted.
    pub const MIN_MAP_SIZE: u32 = 256;
    pub const MAX_MAP_SIZE: u32 = 8192;
    /// Depth bias subtracted before the shadow compare.
    pub const DEFAULT_BIAS: f32 = 0.0005;
    /// Hardware depth bias used while rendering the shadow maps.
    pub const DEPTH_BIAS_CONSTANT: i32 = 2;
    pub const DEPTH_BIAS_SLOPE: f32 = 2.0;
    /// Shadow camera near plane.
    pub const NEAR: f32 = 0.5;
    /// Shadow camera far plane when the light has no cutoff distance.
    pub const DEFAULT_FAR: f32 = 500.0;
    /// Widest shadow frustum; wider cones are clamped to this (degrees).
    pub const MAX_FOV_DEGREES: f32 = 170.0;
}

/// Lighting limits shared with the WGSL shaders.
pub mod lighting {
    /// Size of the spotlight array in the light uniform.
    pub const MAX_SPOT_LIGHTS: usize = 3;
    /// Ambient term; the stage is lit by the spotlights only.
    pub const AMBIENT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
    pub const AMBIENT_STRENGTH: f32 = 0.0;
}

/// Axes helper colors.
pub mod axes {
    pub const X_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
    pub const Y_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
    pub const Z_COLOR: [f32; 3] = [0.0, 0.0, 1.0];
}
