//! Core traits for the renderer system.

mod render_pass;
mod sub_renderer;

pub use render_pass::*;
pub use sub_renderer::*;
