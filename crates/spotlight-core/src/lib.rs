//! Spotlight Stage Core
//!
//! GPU-free state for the spotlight stage demo:
//! - Scene: planes, cylinders, spotlights and the shared material
//! - Bindings: debug panel control table and named change handlers
//! - Animation: sinusoidal spacing applied by the render loop
//! - Camera / OrbitControls: perspective camera with damped orbit navigation
//! - RenderLoop: per-frame tick with an injectable clock and frame target

pub mod animation;
pub mod bindings;
pub mod camera;
pub mod clock;
pub mod config;
pub mod light;
pub mod material;
pub mod mesh;
pub mod orbit;
pub mod params;
pub mod render_loop;
pub mod resize;
pub mod scene;
pub mod state;
pub mod stats;

pub use camera::*;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::*;
pub use light::*;
pub use material::*;
pub use mesh::*;
pub use orbit::OrbitControls;
pub use params::*;
pub use render_loop::{FrameTarget, LoopState, RenderLoop};
pub use resize::{MAX_PIXEL_RATIO, Viewport, handle_resize};
pub use scene::*;
pub use state::AppState;
pub use stats::FrameStats;
