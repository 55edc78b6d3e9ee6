//! Built-in sub-renderers.
//!
//! - [`MeshRenderer`]: lit planes and cylinders (also records the shadow passes)
//! - [`AxesRenderer`]: axes helper lines

pub mod axes;
pub mod mesh;

pub use axes::AxesRenderer;
pub use mesh::{InstanceBatch, MeshRenderer, batch_meshes};

/// Render priorities for sub-renderers.
///
/// Lower values are rendered first.
pub mod priorities {
    /// Meshes are the main content
    pub const MESH: i32 = 100;
    /// Axes are rendered on top of meshes
    pub const AXES: i32 = 200;
}
