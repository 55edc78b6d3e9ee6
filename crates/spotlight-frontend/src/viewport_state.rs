//! Viewport rendering state

use std::sync::Arc;

use spotlight_core::AppState;
use spotlight_renderer::{RenderError, Renderer};

/// Offscreen color target shown by egui as an image
struct RenderTexture {
    #[allow(dead_code)]
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    egui_texture_id: egui::TextureId,
    width: u32,
    height: u32,
}

/// Viewport rendering state
pub struct ViewportState {
    pub renderer: Renderer,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    render_texture: Option<RenderTexture>,
}

impl ViewportState {
    pub fn new(
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
        width: u32,
        height: u32,
    ) -> Self {
        let renderer = Renderer::new(device.clone(), queue.clone(), width, height);
        Self {
            renderer,
            device,
            queue,
            render_texture: None,
        }
    }

    /// Ensure the render texture matches the requested size.
    ///
    /// Returns `None` for a zero-sized request; the previous texture is kept.
    pub fn ensure_texture(
        &mut self,
        width: u32,
        height: u32,
        egui_renderer: &mut egui_wgpu::Renderer,
    ) -> Option<egui::TextureId> {
        if width == 0 || height == 0 {
            return None;
        }

        let needs_recreate = self
            .render_texture
            .as_ref()
            .is_none_or(|t| t.width != width || t.height != height);

        if needs_recreate {
            if let Err(e) = self.renderer.resize(width, height) {
                tracing::warn!("Skipping viewport resize: {}", e);
                return None;
            }

            if let Some(old) = self.render_texture.take() {
                egui_renderer.free_texture(&old.egui_texture_id);
            }

            let texture = self.device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Viewport Render Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: self.renderer.format(),
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                    | wgpu::TextureUsages::TEXTURE_BINDING,
                view_formats: &[],
            });
            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
            let egui_texture_id =
                egui_renderer.register_native_texture(&self.device, &view, wgpu::FilterMode::Linear);

            tracing::debug!("Viewport texture recreated at {width}x{height}");

            self.render_texture = Some(RenderTexture {
                texture,
                view,
                egui_texture_id,
                width,
                height,
            });
        }

        self.render_texture.as_ref().map(|t| t.egui_texture_id)
    }

    /// Render the stage into the viewport texture
    pub fn draw(&mut self, state: &AppState) -> Result<(), RenderError> {
        let Some(rt) = &self.render_texture else {
            return Err(RenderError::TargetNotReady);
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Viewport Render Encoder"),
            });

        self.renderer
            .render(&mut encoder, &rt.view, &state.scene, &state.camera)?;

        self.queue.submit(std::iter::once(encoder.finish()));
        Ok(())
    }
}
