//! Idle backdrop
//!
//! While no scene is active the manager draws a single shader-driven plane
//! behind the home camera. The graph is rebuilt for every frame and disposed
//! right after drawing.

use crate::foundation::math::{Transform, Vec3};
use crate::scene::{Geometry, Material, SceneGraph, SceneNode, Uniform};

/// Shader program used by the backdrop plane
pub const BACKDROP_SHADER: &str = "home_gradient";

/// Edge length of the square backdrop plane
pub const BACKDROP_SIZE: f32 = 20.0;

/// Distance of the backdrop plane behind the origin
pub const BACKDROP_DEPTH: f32 = -10.0;

/// Build the backdrop graph with its shader clock set to `time`
pub fn home_backdrop(time: f32) -> SceneGraph {
    let mut graph = SceneGraph::new("home_backdrop");
    let plane = SceneNode::mesh(
        "backdrop",
        Geometry::plane("backdrop", 1, 1),
        Material::shader("backdrop", BACKDROP_SHADER).with_uniform("time", Uniform::Float(time)),
    )
    .with_transform(Transform::from_position(Vec3::new(0.0, 0.0, BACKDROP_DEPTH)).with_uniform_scale(BACKDROP_SIZE));
    graph.add(plane);
    graph
}
