//! Spotlight Stage Renderer
//!
//! WGPU-based rendering of the stage scene.
//!
//! # Architecture
//!
//! - [`context::RenderContext`] - GPU context abstraction
//! - [`sub_renderers::MeshRenderer`] - lit meshes with spotlight shadow maps
//! - [`traits::SubRenderer`] - Trait for overlay renderers
//! - [`plugin::RendererRegistry`] - Registry for managing sub-renderers
//! - [`Renderer`] - Owns all of the above and records a frame
//!
//! # Example
//!
//! ```ignore
//! use spotlight_renderer::Renderer;
//!
//! let mut renderer = Renderer::new(device, queue, 800, 600);
//! renderer.render(&mut encoder, &view, &state.scene, &state.camera)?;
//! ```

pub mod camera;
pub mod constants;
pub mod context;
pub mod error;
pub mod geometry;
pub mod gpu_resources;
pub mod light;
pub mod material;
pub mod pipeline;
pub mod plugin;
pub mod renderer;
pub mod sub_renderers;
pub mod traits;
pub mod vertex;

pub use camera::CameraUniform;
pub use context::RenderContext;
pub use error::RenderError;
pub use geometry::MeshData;
pub use plugin::RendererRegistry;
pub use renderer::Renderer;
pub use traits::{PassType, SubRenderer};
pub use vertex::{MeshInstance, MeshVertex, PositionColorVertex};
