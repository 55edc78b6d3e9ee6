//! Frame recording for the stage

use std::sync::Arc;

use spotlight_core::{PerspectiveCamera, Scene};

use crate::camera::CameraUniform;
use crate::constants::viewport::{CLEAR_COLOR, COLOR_FORMAT};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::gpu_resources::create_depth_texture;
use crate::plugin::RendererRegistry;
use crate::sub_renderers::{AxesRenderer, MeshRenderer};
use crate::traits::{PassType, SubRenderer};

/// Reject render targets with a zero dimension.
pub fn validate_target_size(width: u32, height: u32) -> Result<(u32, u32), RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::ZeroSizedTarget(width, height));
    }
    Ok((width, height))
}

/// Owns the render context, the mesh renderer and the overlay registry.
pub struct Renderer {
    ctx: RenderContext,
    mesh_renderer: MeshRenderer,
    registry: RendererRegistry,
    depth: Option<(wgpu::Texture, wgpu::TextureView)>,
}

impl Renderer {
    pub fn new(
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
        width: u32,
        height: u32,
    ) -> Self {
        let format = COLOR_FORMAT;
        let ctx = RenderContext::new(device, queue, format, width, height);

        let mut mesh_renderer = MeshRenderer::new();
        mesh_renderer.on_init(&ctx);

        let mut registry = RendererRegistry::new();
        registry.register(AxesRenderer::new());
        registry.init_all(&ctx);

        let depth = validate_target_size(width, height)
            .ok()
            .map(|(w, h)| create_depth_texture(ctx.device(), w, h));

        tracing::info!("Renderer initialized ({format:?}, {width}x{height})");

        Self {
            ctx,
            mesh_renderer,
            registry,
            depth,
        }
    }

    /// Format the viewport texture must be created with.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.ctx.surface_format()
    }

    pub fn size(&self) -> (u32, u32) {
        (self.ctx.width(), self.ctx.height())
    }

    /// Resize the depth target. No-op when the size is unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        let (width, height) = validate_target_size(width, height)?;
        if self.depth.is_some() && self.size() == (width, height) {
            return Ok(());
        }

        tracing::debug!("Resizing render targets to {width}x{height}");
        self.depth = Some(create_depth_texture(self.ctx.device(), width, height));
        self.ctx.resize(width, height);
        self.mesh_renderer.on_resize(&self.ctx, width, height);
        self.registry.resize_all(&self.ctx, width, height);
        Ok(())
    }

    /// Record the shadow passes and the main pass into `encoder`.
    pub fn render(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        scene: &Scene,
        camera: &PerspectiveCamera,
    ) -> Result<(), RenderError> {
        let Some((_, depth_view)) = &self.depth else {
            return Err(RenderError::TargetNotReady);
        };

        self.ctx.update_camera(&CameraUniform::from_camera(camera));
        if self.mesh_renderer.is_enabled() {
            self.mesh_renderer.prepare(&self.ctx, scene);
            self.mesh_renderer.render_shadows(encoder);
        }
        self.registry.prepare_all(&self.ctx, scene);

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Stage Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if self.mesh_renderer.is_enabled() {
            self.mesh_renderer.render(&mut pass, scene);
        }
        self.registry.render_all(&mut pass, scene, PassType::Opaque);
        self.registry.render_all(&mut pass, scene, PassType::Overlay);
        Ok(())
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        self.mesh_renderer.on_destroy();
        self.registry.destroy_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_targets_are_rejected() {
        assert_eq!(validate_target_size(800, 600), Ok((800, 600)));
        assert_eq!(
            validate_target_size(0, 600),
            Err(RenderError::ZeroSizedTarget(0, 600))
        );
        assert_eq!(
            validate_target_size(800, 0),
            Err(RenderError::ZeroSizedTarget(800, 0))
        );
    }

    #[test]
    fn test_viewport_format_encodes_srgb_in_hardware() {
        // egui samples the viewport texture as linear color, so the shader
        // writes linear values and the format does the encoding exactly once.
        assert_eq!(COLOR_FORMAT, wgpu::TextureFormat::Rgba8UnormSrgb);
        assert!(COLOR_FORMAT.is_srgb());
    }
}
