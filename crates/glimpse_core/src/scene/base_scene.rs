//! Scene contract
//!
//! A scene is a self-contained unit of visual content with a uniform
//! lifecycle:
//!
//! ```text
//! constructed → set_camera → init → (on_activate → update* → on_deactivate)* → dispose
//! ```
//!
//! Concrete scenes embed a [`BaseScene`] and implement [`Scene::init`] and
//! [`Scene::update`]; every other hook has a default built on the base.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::{Rc, Weak};

use crate::error::SceneInitError;
use crate::render::Camera;
use crate::scene::SceneGraph;

/// The single camera owned by the scene manager
pub type SharedCamera = Rc<RefCell<Camera>>;

/// Non-owning handle to the shared camera held by scenes
pub type CameraRef = Weak<RefCell<Camera>>;

/// Future returned by [`Scene::init`]
///
/// Boxed so `Scene` stays object-safe. It is not `Send`; scenes are built
/// and driven on the host's frame thread.
pub type InitFuture<'a> = Pin<Box<dyn Future<Output = Result<(), SceneInitError>> + 'a>>;

/// State shared by every scene implementation
#[derive(Debug)]
pub struct BaseScene {
    name: String,
    graph: SceneGraph,
    camera: CameraRef,
    initialized: bool,
    disposed: bool,
    time: f32,
}

impl BaseScene {
    /// Empty, uninitialized scene state
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            graph: SceneGraph::new(name.clone()),
            name,
            camera: Weak::new(),
            initialized: false,
            disposed: false,
            time: 0.0,
        }
    }

    /// Scene name used in logs
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scene's sub-graph
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// Mutable access to the scene's sub-graph
    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    /// Store the shared camera handle
    pub fn set_camera(&mut self, camera: CameraRef) {
        self.camera = camera;
    }

    /// The shared camera, if its owner is still alive
    pub fn camera(&self) -> Option<SharedCamera> {
        self.camera.upgrade()
    }

    /// Check that `init` may run now
    pub fn begin_init(&self) -> Result<(), SceneInitError> {
        if self.disposed {
            return Err(SceneInitError::Disposed);
        }
        if self.initialized {
            return Err(SceneInitError::AlreadyInitialized);
        }
        Ok(())
    }

    /// Install the built sub-graph and mark the scene initialized
    pub fn finish_init(&mut self, graph: SceneGraph) {
        self.graph = graph;
        self.initialized = true;
        self.time = 0.0;
    }

    /// Whether `init` completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether `dispose` ran
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Whether `update` should do any work
    pub fn is_live(&self) -> bool {
        self.initialized && !self.disposed
    }

    /// Scene-local animation time in seconds
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance scene-local time; returns the new time, or `None` when the
    /// scene is not live and the update must be skipped
    pub fn advance(&mut self, dt: f32) -> Option<f32> {
        if !self.is_live() {
            return None;
        }
        self.time += dt;
        Some(self.time)
    }

    /// Release the sub-graph; runs at most once and returns how many
    /// resources were released
    pub fn dispose(&mut self) -> usize {
        if self.disposed {
            return 0;
        }
        self.disposed = true;
        let released = self.graph.dispose();
        log::debug!("Scene '{}' disposed ({} resources)", self.name, released);
        released
    }
}

/// Uniform lifecycle every showcase scene implements
pub trait Scene {
    /// Shared scene state
    fn base(&self) -> &BaseScene;

    /// Mutable shared scene state
    fn base_mut(&mut self) -> &mut BaseScene;

    /// Build the sub-graph
    ///
    /// Must be awaited exactly once. Fails with
    /// [`SceneInitError::AlreadyInitialized`] on a second call and with
    /// [`SceneInitError::Disposed`] after [`Scene::dispose`].
    fn init(&mut self) -> InitFuture<'_>;

    /// Advance animated state by `dt` seconds; no-op unless initialized
    fn update(&mut self, dt: f32);

    /// Inject the shared camera; called once by the manager before `init`
    fn set_camera(&mut self, camera: CameraRef) {
        self.base_mut().set_camera(camera);
    }

    /// The scene's renderable sub-graph
    fn graph(&self) -> &SceneGraph {
        self.base().graph()
    }

    /// Whether `init` completed
    fn is_initialized(&self) -> bool {
        self.base().is_initialized()
    }

    /// Called when the scene becomes the active scene
    fn on_activate(&mut self) {
        log::info!("Scene '{}' activated", self.base().name());
    }

    /// Called when the scene stops being the active scene
    fn on_deactivate(&mut self) {
        log::info!("Scene '{}' deactivated", self.base().name());
    }

    /// Viewport changed; the shared camera's projection is handled elsewhere
    fn on_resize(&mut self, _width: u32, _height: u32) {}

    /// Release every resource in the sub-graph; later calls do nothing
    fn dispose(&mut self) {
        self.base_mut().dispose();
    }
}
