//! Renderer boundary
//!
//! The core never rasterizes anything itself. Each frame it hands a
//! [`SceneGraph`] and the shared [`Camera`] to a [`Renderer`].

use crate::render::Camera;
use crate::scene::{NodeKind, SceneGraph};

/// Draws a scene sub-graph from a camera's point of view
pub trait Renderer {
    /// Render one frame
    fn render(&mut self, graph: &SceneGraph, camera: &Camera);
}

/// Statistics gathered for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Mesh nodes submitted
    pub meshes: usize,
    /// Point-cloud nodes submitted
    pub point_clouds: usize,
    /// Vertices across all submitted nodes
    pub vertices: usize,
}

/// Renderer without a display surface
///
/// Walks the graph exactly as a real backend would when building its draw
/// list, and keeps counters instead of issuing GPU commands.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u64,
    last_frame: FrameStats,
    total_vertices: u64,
}

impl HeadlessRenderer {
    /// Create a renderer with zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames rendered so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Statistics of the most recent frame
    pub fn last_frame(&self) -> FrameStats {
        self.last_frame
    }

    /// Vertices submitted across all frames
    pub fn total_vertices(&self) -> u64 {
        self.total_vertices
    }
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, graph: &SceneGraph, camera: &Camera) {
        let mut stats = FrameStats::default();
        graph.traverse(|node| match &node.kind {
            NodeKind::Mesh { geometry, .. } if !geometry.is_disposed() => {
                stats.meshes += 1;
                stats.vertices += geometry.vertex_count();
            }
            NodeKind::Points { geometry, .. } if !geometry.is_disposed() => {
                stats.point_clouds += 1;
                stats.vertices += geometry.vertex_count();
            }
            _ => {}
        });

        self.frames += 1;
        self.total_vertices += stats.vertices as u64;
        self.last_frame = stats;

        log::trace!(
            "Frame {}: {} meshes, {} point clouds, {} vertices, camera at {:?}",
            self.frames,
            stats.meshes,
            stats.point_clouds,
            stats.vertices,
            camera.position
        );
    }
}
