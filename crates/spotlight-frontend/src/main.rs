//! Spotlight Stage
//!
//! Three colored spotlights casting shadows over a row of cylinders.

fn main() -> eframe::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spotlight_frontend=debug,spotlight_renderer=info,spotlight_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Spotlight Stage");

    // Optional explicit config file; otherwise the OS config directory is used
    let config_path = std::env::args_os().nth(1).map(std::path::PathBuf::from);

    let wgpu_options = egui_wgpu::WgpuConfiguration {
        wgpu_setup: egui_wgpu::WgpuSetup::CreateNew {
            supported_backends: wgpu::Backends::GL,
            power_preference: wgpu::PowerPreference::LowPower,
            device_descriptor: std::sync::Arc::new(|_adapter| wgpu::DeviceDescriptor {
                label: Some("spotlight-stage device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
            }),
        },
        ..Default::default()
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([320.0, 240.0])
            .with_title("Spotlight Stage"),
        wgpu_options,
        ..Default::default()
    };

    eframe::run_native(
        "spotlight-stage",
        native_options,
        Box::new(move |cc| {
            let app = match config_path {
                Some(path) => spotlight_frontend::SpotlightApp::from_config_file(cc, &path)?,
                None => spotlight_frontend::SpotlightApp::new(cc)?,
            };
            Ok(Box::new(app))
        }),
    )
}
