//! Scene lifecycle and camera choreography
//!
//! ## Architecture
//!
//! ```text
//! SceneRegistry (configs + factories)
//!      ↓ load_scene
//! SceneManager ──→ CameraController ──→ shared Camera
//!      ↓ update / render
//! active Scene (owns its SceneGraph) ──→ Renderer
//! ```
//!
//! - **SceneConfig / MovementSpec**: what a scene is and how the camera moves through it
//! - **Scene / BaseScene**: the lifecycle contract every scene implements
//! - **SceneRegistry**: static id → (config, factory) table
//! - **CameraController**: time-driven scripted camera movement
//! - **SceneManager**: the single-active-scene state machine

mod base_scene;
mod camera_controller;
mod config;
mod registry;
mod scene_graph;
mod scene_manager;

#[cfg(test)]
mod tests;

pub use base_scene::{BaseScene, CameraRef, InitFuture, Scene, SharedCamera};
pub use camera_controller::{flythrough_step, orbit_position, CameraController};
pub use config::{CameraPath, FlythroughMovement, MovementSpec, OrbitMovement, SceneCatalog, SceneConfig};
pub use registry::{SceneEntry, SceneFactory, SceneRegistry};
pub use scene_graph::{Geometry, Light, LightKind, Material, NodeKind, SceneGraph, SceneNode, Uniform};
pub use scene_manager::{home_position, SceneManager};
