//! Renderer errors

/// Errors raised while recording a frame.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Render target has not been created yet")]
    TargetNotReady,
    #[error("Render target has zero size ({0}x{1})")]
    ZeroSizedTarget(u32, u32),
}
