//! SubRenderer trait definition.

use spotlight_core::Scene;

use crate::context::RenderContext;
use crate::traits::PassType;

/// A sub-renderer that handles a specific visual element of the stage.
///
/// Sub-renderers are executed in order of their priority (lower values first).
/// Typical priority ranges:
/// - 100-199: Main geometry (meshes)
/// - 200-299: Overlays (axes)
pub trait SubRenderer: Send + Sync {
    /// Returns the unique name of this sub-renderer.
    fn name(&self) -> &str;

    /// Returns the render priority (lower = rendered first).
    fn priority(&self) -> i32;

    /// Pass this sub-renderer draws in.
    fn pass_type(&self) -> PassType {
        PassType::Overlay
    }

    fn is_enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    /// Called when the render context is initialized.
    ///
    /// Use this to create GPU resources (pipelines, buffers, etc.).
    fn on_init(&mut self, ctx: &RenderContext);

    /// Called when the viewport is resized.
    fn on_resize(&mut self, ctx: &RenderContext, width: u32, height: u32);

    /// Prepare data for rendering.
    ///
    /// Called once per frame before the render pass.
    fn prepare(&mut self, ctx: &RenderContext, scene: &Scene);

    /// Execute the render commands.
    fn render<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>, scene: &Scene);

    /// Called when the sub-renderer is being destroyed.
    fn on_destroy(&mut self) {}
}
