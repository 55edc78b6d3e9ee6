//! Main application

use std::path::Path;

use spotlight_core::{AppState, FrameTarget, RenderLoop, StageConfig, SystemClock};
use spotlight_renderer::RenderError;

use crate::config::{ConfigError, ConfigManager};
use crate::input::{PointerInput, ResizeWatcher, ViewportSize};
use crate::panels::{DebugPanel, render_fps_overlay};
use crate::viewport_state::ViewportState;

/// Errors that abort application startup
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("eframe did not provide a wgpu render state")]
    MissingRenderSurface,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Draws into the viewport texture and schedules repaints through egui.
struct ViewportFrame<'a> {
    viewport: &'a mut ViewportState,
    ctx: &'a egui::Context,
}

impl FrameTarget for ViewportFrame<'_> {
    type Error = RenderError;

    fn draw(&mut self, state: &AppState) -> Result<(), RenderError> {
        self.viewport.draw(state)
    }

    fn request_next_frame(&mut self) {
        self.ctx.request_repaint();
    }
}

/// Spotlight stage application
pub struct SpotlightApp {
    render_state: egui_wgpu::RenderState,
    state: AppState,
    render_loop: RenderLoop<SystemClock>,
    viewport: ViewportState,
    resize: ResizeWatcher,
    debug_panel: DebugPanel,
}

impl SpotlightApp {
    /// Create the app with the configuration from the OS config directory.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, AppError> {
        let config = ConfigManager::load();
        Self::with_config(cc, config.config())
    }

    /// Create the app from an explicit configuration file. Unlike
    /// [`SpotlightApp::new`], a missing or invalid file is an error.
    pub fn from_config_file(
        cc: &eframe::CreationContext<'_>,
        path: &Path,
    ) -> Result<Self, AppError> {
        let config = ConfigManager::load_from_path(path)?.ok_or_else(|| ConfigError::Io {
            path: path.to_path_buf(),
            source: std::io::ErrorKind::NotFound.into(),
        })?;
        tracing::info!("Loaded config from {:?}", path);
        Self::with_config(cc, &config)
    }

    pub fn with_config(
        cc: &eframe::CreationContext<'_>,
        config: &StageConfig,
    ) -> Result<Self, AppError> {
        let render_state = cc
            .wgpu_render_state
            .clone()
            .ok_or(AppError::MissingRenderSurface)?;

        let pixels_per_point = cc.egui_ctx.pixels_per_point();
        let screen = cc.egui_ctx.screen_rect();
        let state = AppState::new(config, screen.width(), screen.height(), pixels_per_point);

        let (width, height) = state.viewport.physical_size();
        let viewport = ViewportState::new(
            render_state.device.clone(),
            render_state.queue.clone(),
            width,
            height,
        );

        tracing::info!(
            "Spotlight stage ready ({} meshes, {} lights)",
            state.scene.meshes().count(),
            state.scene.lights.len()
        );

        Ok(Self {
            render_state,
            state,
            render_loop: RenderLoop::new(SystemClock::new()),
            viewport,
            resize: ResizeWatcher::new(),
            debug_panel: DebugPanel::new(),
        })
    }

    fn viewport_ui(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let size = ViewportSize {
            width: available.x,
            height: available.y,
            pixels_per_point: ui.ctx().pixels_per_point(),
        };
        if let Some(size) = self.resize.observe(size) {
            self.state
                .resize(size.width, size.height, size.pixels_per_point);
        }

        let (rect, response) = ui.allocate_exact_size(available, egui::Sense::click_and_drag());

        let (width, height) = self.state.viewport.physical_size();
        let texture_id = {
            let mut egui_renderer = self.render_state.renderer.write();
            self.viewport.ensure_texture(width, height, &mut egui_renderer)
        };
        let Some(texture_id) = texture_id else {
            return;
        };

        let input = PointerInput::from_response(ui, &response);
        if !input.is_idle() {
            input.apply(&mut self.state.controls, &self.state.camera, rect.height());
        }

        if self.render_loop.is_running() {
            let mut frame = ViewportFrame {
                viewport: &mut self.viewport,
                ctx: ui.ctx(),
            };
            if let Err(e) = self.render_loop.tick(&mut self.state, &mut frame) {
                tracing::debug!("Viewport draw failed, loop halted: {}", e);
            }
        }

        ui.painter().image(
            texture_id,
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        if !self.render_loop.is_running() {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Rendering stopped, see log",
                egui::FontId::proportional(16.0),
                egui::Color32::LIGHT_RED,
            );
        }

        render_fps_overlay(ui, rect, self.render_loop.stats());
    }
}

impl eframe::App for SpotlightApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Panel edits land before this frame's tick
        self.debug_panel.show(ctx, &mut self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.viewport_ui(ui));
    }
}
