//! Render pass types.

/// Passes recorded each frame, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassType {
    /// Depth-only pass into one spotlight's shadow map layer
    Shadow,
    /// Lit geometry (depth tested, no blending)
    Opaque,
    /// Helpers drawn after the lit geometry (axes)
    Overlay,
}

impl PassType {
    /// Returns true if this pass should use depth testing.
    pub fn uses_depth_test(&self) -> bool {
        matches!(self, PassType::Opaque | PassType::Shadow | PassType::Overlay)
    }

    /// Returns true if this pass writes color.
    pub fn writes_color(&self) -> bool {
        !matches!(self, PassType::Shadow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_pass_is_depth_only() {
        assert!(PassType::Shadow.uses_depth_test());
        assert!(!PassType::Shadow.writes_color());
        assert!(PassType::Opaque.writes_color());
        assert!(PassType::Overlay.writes_color());
    }
}
