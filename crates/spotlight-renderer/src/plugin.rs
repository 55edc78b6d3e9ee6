//! Registry of sub-renderers.

use spotlight_core::Scene;

use crate::context::RenderContext;
use crate::traits::{PassType, SubRenderer};

/// Registry for managing sub-renderers.
///
/// The registry owns its sub-renderers and drives their lifecycle
/// (initialization, resize, prepare, render, cleanup) in priority order.
pub struct RendererRegistry {
    sub_renderers: Vec<Box<dyn SubRenderer>>,
    sorted: bool,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self {
            sub_renderers: Vec::new(),
            sorted: true,
        }
    }

    /// Registers a new sub-renderer.
    pub fn register<R: SubRenderer + 'static>(&mut self, renderer: R) {
        tracing::debug!("Registering sub-renderer '{}'", renderer.name());
        self.sub_renderers.push(Box::new(renderer));
        self.sorted = false;
    }

    /// Sorts sub-renderers by priority if needed.
    fn ensure_sorted(&mut self) {
        if !self.sorted {
            self.sub_renderers.sort_by_key(|r| r.priority());
            self.sorted = true;
        }
    }

    /// Initializes all sub-renderers with the given context.
    pub fn init_all(&mut self, ctx: &RenderContext) {
        self.ensure_sorted();
        for renderer in &mut self.sub_renderers {
            renderer.on_init(ctx);
        }
    }

    /// Notifies all sub-renderers of a resize.
    pub fn resize_all(&mut self, ctx: &RenderContext, width: u32, height: u32) {
        for renderer in &mut self.sub_renderers {
            renderer.on_resize(ctx, width, height);
        }
    }

    /// Prepares all enabled sub-renderers for rendering.
    pub fn prepare_all(&mut self, ctx: &RenderContext, scene: &Scene) {
        self.ensure_sorted();
        for renderer in &mut self.sub_renderers {
            if renderer.is_enabled() {
                renderer.prepare(ctx, scene);
            }
        }
    }

    /// Renders the enabled sub-renderers of one pass in priority order.
    pub fn render_all<'a>(
        &'a self,
        pass: &mut wgpu::RenderPass<'a>,
        scene: &Scene,
        pass_type: PassType,
    ) {
        for renderer in &self.sub_renderers {
            if renderer.is_enabled() && renderer.pass_type() == pass_type {
                renderer.render(pass, scene);
            }
        }
    }

    /// Destroys all sub-renderers.
    pub fn destroy_all(&mut self) {
        for renderer in &mut self.sub_renderers {
            renderer.on_destroy();
        }
        self.sub_renderers.clear();
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRenderer {
        name: String,
        priority: i32,
        enabled: bool,
    }

    impl TestRenderer {
        fn new(name: &str, priority: i32) -> Self {
            Self {
                name: name.to_string(),
                priority,
                enabled: true,
            }
        }
    }

    impl SubRenderer for TestRenderer {
        fn name(&self) -> &str {
            &self.name
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }

        fn on_init(&mut self, _ctx: &RenderContext) {}
        fn on_resize(&mut self, _ctx: &RenderContext, _width: u32, _height: u32) {}
        fn prepare(&mut self, _ctx: &RenderContext, _scene: &Scene) {}
        fn render<'a>(&'a self, _pass: &mut wgpu::RenderPass<'a>, _scene: &Scene) {}
    }

    fn names(registry: &RendererRegistry) -> Vec<&str> {
        registry.sub_renderers.iter().map(|r| r.name()).collect()
    }

    #[test]
    fn test_registry_ordering() {
        let mut registry = RendererRegistry::new();

        registry.register(TestRenderer::new("axes", 200));
        registry.register(TestRenderer::new("mesh", 100));
        registry.register(TestRenderer::new("late", 300));
        assert!(!registry.sorted);

        registry.ensure_sorted();

        assert_eq!(names(&registry), vec!["mesh", "axes", "late"]);
    }

    #[test]
    fn test_registry_destroy_all_clears() {
        let mut registry = RendererRegistry::default();
        registry.register(TestRenderer::new("axes", 200));
        assert_eq!(names(&registry), vec!["axes"]);

        registry.destroy_all();
        assert!(registry.sub_renderers.is_empty());
    }
}
