//! Built-in showcase scenes
//!
//! Each scene ships with its default configuration and a factory. Layout
//! randomness comes from a seeded [`StdRng`](rand::rngs::StdRng), so the
//! same seed always builds the same sub-graph.

pub mod nebula;
pub mod waterfall;

pub use nebula::NebulaScene;
pub use waterfall::WaterfallScene;

use crate::foundation::math::{Transform, Vec3};
use crate::scene::{Scene, SceneConfig, SceneFactory};

/// Seed used when a scene is built without an explicit one
pub const DEFAULT_SEED: u64 = 0x5eed_1e55;

/// Default configurations of the built-in scenes, in navigation order
pub fn default_configs() -> Vec<SceneConfig> {
    vec![waterfall::default_config(), nebula::default_config()]
}

/// Factory for a built-in scene id
pub fn builtin_factory(id: &str) -> Option<SceneFactory> {
    match id {
        waterfall::ID => Some(Box::new(|| -> Box<dyn Scene> { Box::new(WaterfallScene::new()) })),
        nebula::ID => Some(Box::new(|| -> Box<dyn Scene> { Box::new(NebulaScene::new()) })),
        _ => None,
    }
}

/// Transform placing a unit primitive at `position` with per-axis `scale`
fn placed(position: Vec3, scale: Vec3) -> Transform {
    Transform {
        position,
        scale,
        ..Transform::identity()
    }
}
