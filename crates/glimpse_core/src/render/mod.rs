//! # Rendering Boundary
//!
//! The showcase core does not rasterize anything. This module holds the
//! pieces that sit on the edge between scene logic and a rendering backend:
//!
//! - **Camera**: the single shared perspective camera
//! - **Renderer**: the opaque `render(graph, camera)` call, plus a headless
//!   implementation used by the host binary and tests
//! - **Backdrop**: the fallback visual drawn while no scene is active

pub mod backdrop;
pub mod camera;
pub mod renderer;

pub use backdrop::home_backdrop;
pub use camera::Camera;
pub use renderer::{FrameStats, HeadlessRenderer, Renderer};
