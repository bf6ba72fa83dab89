//! # Glimpse Core
//!
//! Scene lifecycle and camera choreography for an immersive 3D showcase.
//!
//! ## Features
//!
//! - **Scene Contract**: uniform async-init / activate / update / dispose lifecycle
//! - **Scene Registry**: static catalog of scene configurations and factories
//! - **Camera Choreography**: orbit and looping flythrough movements driven by elapsed time
//! - **Scene Manager**: single-active-scene state machine with an idle home drift
//! - **Headless Rendering**: opaque renderer boundary with a counting implementation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glimpse_core::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ShowcaseConfig::default();
//!     let registry = SceneRegistry::builtin();
//!     let mut manager = SceneManager::new(&config);
//!
//!     for id in registry.ids() {
//!         pollster::block_on(manager.load_scene(&registry, id))?;
//!     }
//!     manager.set_active_scene(Some("waterfall"))?;
//!
//!     let mut renderer = HeadlessRenderer::new();
//!     loop {
//!         manager.update();
//!         manager.render(&mut renderer);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod core;
pub mod error;
pub mod foundation;
pub mod render;
pub mod scene;
pub mod scenes;

pub use error::{SceneInitError, ShowcaseError, ShowcaseResult};

/// Common imports for showcase hosts
pub mod prelude {
    pub use crate::{
        core::config::{CameraSettings, Config, HomeCameraConfig, ShowcaseConfig, ViewportConfig},
        error::{SceneInitError, ShowcaseError, ShowcaseResult},
        foundation::{
            math::{Transform, Vec3},
            time::{Clock, FixedStepClock, Stopwatch, Timer},
        },
        render::{Camera, HeadlessRenderer, Renderer},
        scene::{
            BaseScene, CameraController, InitFuture, MovementSpec, Scene, SceneCatalog, SceneConfig, SceneGraph,
            SceneManager, SceneRegistry,
        },
        scenes,
    };
}
