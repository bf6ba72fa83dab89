//! Scene Manager - single-active-scene state machine
//!
//! The manager owns the shared camera, every registered scene and the
//! camera controller. The host drives it once per display frame:
//!
//! ```text
//! update()  → camera controller (or home drift) → active scene update
//! render()  → renderer draws the active sub-graph, or the idle backdrop
//! ```
//!
//! It is either **Idle** (no active scene, the camera drifts around the
//! origin) or **Active(id)**. Every rejected call leaves the manager in the
//! state it was in.

use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::core::config::{HomeCameraConfig, ShowcaseConfig};
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::foundation::math::Vec3;
use crate::foundation::time::{Clock, Timer};
use crate::render::{home_backdrop, Camera, Renderer};
use crate::scene::registry::initialize;
use crate::scene::{CameraController, Scene, SceneConfig, SceneRegistry, SharedCamera};

/// Camera position of the idle drift after `elapsed` seconds
pub fn home_position(home: &HomeCameraConfig, elapsed: f32) -> Vec3 {
    let angle = elapsed * home.speed;
    Vec3::new(
        angle.sin() * home.radius,
        home.height + (angle * home.vertical_frequency).sin() * home.vertical_amplitude,
        angle.cos() * home.radius,
    )
}

/// Orchestrates the active scene, the shared camera and the frame cycle
pub struct SceneManager {
    scenes: HashMap<String, Box<dyn Scene>>,
    configs: HashMap<String, SceneConfig>,
    order: Vec<String>,
    active_scene_id: Option<String>,
    camera: SharedCamera,
    camera_controller: CameraController,
    clock: Box<dyn Clock>,
    home: HomeCameraConfig,
    home_elapsed: f32,
    total_elapsed: f32,
}

impl SceneManager {
    /// Create an idle manager driven by a wall-clock [`Timer`]
    pub fn new(config: &ShowcaseConfig) -> Self {
        Self::with_clock(config, Box::new(Timer::new()))
    }

    /// Create an idle manager driven by the given clock
    pub fn with_clock(config: &ShowcaseConfig, clock: Box<dyn Clock>) -> Self {
        let camera = Camera::from_settings(&config.camera, config.viewport.aspect_ratio());
        log::info!(
            "Scene manager ready ({}x{}, fov {}°)",
            config.viewport.width,
            config.viewport.height,
            config.camera.fov_degrees
        );

        Self {
            scenes: HashMap::new(),
            configs: HashMap::new(),
            order: Vec::new(),
            active_scene_id: None,
            camera: Rc::new(RefCell::new(camera)),
            camera_controller: CameraController::new(),
            clock,
            home: config.home.clone(),
            home_elapsed: 0.0,
            total_elapsed: 0.0,
        }
    }

    /// Register an initialized scene under `id`
    ///
    /// The scene receives the shared camera handle. Fails on a duplicate id,
    /// an invalid or mismatched configuration, or a scene whose `init` has
    /// not completed.
    pub fn add_scene(&mut self, id: &str, mut scene: Box<dyn Scene>, config: SceneConfig) -> ShowcaseResult<()> {
        if self.scenes.contains_key(id) {
            log::warn!("Rejected duplicate scene '{}'", id);
            return Err(ShowcaseError::DuplicateSceneId(id.to_string()));
        }
        if config.id != id {
            return Err(ShowcaseError::invalid_config(
                id,
                format!("configuration belongs to '{}'", config.id),
            ));
        }
        config.validate()?;
        if !scene.is_initialized() {
            return Err(ShowcaseError::SceneNotReady(id.to_string()));
        }

        scene.set_camera(Rc::downgrade(&self.camera));
        self.register(id, scene, config);
        Ok(())
    }

    /// Build, initialize and register a scene from the registry
    ///
    /// The camera is injected before `init` runs. Nothing is registered if
    /// any step fails.
    pub async fn load_scene(&mut self, registry: &SceneRegistry, id: &str) -> ShowcaseResult<()> {
        if self.scenes.contains_key(id) {
            return Err(ShowcaseError::DuplicateSceneId(id.to_string()));
        }
        let config = registry
            .lookup(id)
            .cloned()
            .ok_or_else(|| ShowcaseError::UnknownSceneId(id.to_string()))?;

        let mut scene = registry.instantiate(id)?;
        scene.set_camera(Rc::downgrade(&self.camera));
        initialize(id, scene.as_mut()).await?;
        self.register(id, scene, config);
        Ok(())
    }

    fn register(&mut self, id: &str, scene: Box<dyn Scene>, config: SceneConfig) {
        self.scenes.insert(id.to_string(), scene);
        self.configs.insert(id.to_string(), config);
        self.order.push(id.to_string());
        log::info!("Added scene '{}' ({} registered)", id, self.order.len());
    }

    /// Unregister and dispose a scene, returning to idle first if it is active
    pub fn remove_scene(&mut self, id: &str) -> ShowcaseResult<()> {
        if !self.scenes.contains_key(id) {
            return Err(ShowcaseError::UnknownSceneId(id.to_string()));
        }
        if self.active_scene_id.as_deref() == Some(id) {
            self.set_active_scene(None)?;
        }

        if let Some(mut scene) = self.scenes.remove(id) {
            scene.dispose();
        }
        self.configs.remove(id);
        self.order.retain(|other| other != id);
        log::info!("Removed scene '{}'", id);
        Ok(())
    }

    /// Switch to scene `id`, or back to idle with `None`
    ///
    /// The previously active scene (if any) is deactivated before the new
    /// one is activated, including when `id` names the active scene, which
    /// restarts its movement. An unknown id is rejected before anything
    /// changes.
    pub fn set_active_scene(&mut self, id: Option<&str>) -> ShowcaseResult<()> {
        if let Some(id) = id {
            if !self.scenes.contains_key(id) || !self.configs.contains_key(id) {
                log::warn!("Cannot activate unknown scene '{}'", id);
                return Err(ShowcaseError::UnknownSceneId(id.to_string()));
            }
        }

        self.camera_controller.stop_movement();

        if let Some(previous) = self.active_scene_id.take() {
            if let Some(scene) = self.scenes.get_mut(&previous) {
                scene.on_deactivate();
            }
        }

        match id {
            None => {
                self.home_elapsed = 0.0;
                log::info!("Returned to home");
            }
            Some(id) => {
                if let (Some(scene), Some(config)) = (self.scenes.get_mut(id), self.configs.get(id)) {
                    self.active_scene_id = Some(id.to_string());
                    scene.on_activate();
                    self.camera_controller
                        .start_movement(&mut self.camera.borrow_mut(), config);
                    log::info!("Active scene: '{}' ({})", id, config.name);
                }
            }
        }
        Ok(())
    }

    /// Advance one frame using the manager's clock
    pub fn update(&mut self) {
        let dt = self.clock.tick();
        self.advance(dt);
    }

    /// Advance one frame by an explicit `dt` in seconds
    pub fn advance(&mut self, dt: f32) {
        self.total_elapsed += dt;

        match &self.active_scene_id {
            Some(id) => {
                self.camera_controller.update(&mut self.camera.borrow_mut(), dt);
                if let Some(scene) = self.scenes.get_mut(id) {
                    scene.update(dt);
                }
            }
            None => {
                self.home_elapsed += dt;
                let position = home_position(&self.home, self.home_elapsed);
                self.camera.borrow_mut().set_pose(position, Vec3::zeros());
            }
        }
    }

    /// Draw the active scene, or the idle backdrop when no scene is active
    pub fn render(&self, renderer: &mut dyn Renderer) {
        let camera = self.camera.borrow();
        match self.active_scene() {
            Some(scene) => renderer.render(scene.graph(), &camera),
            None => {
                let mut backdrop = home_backdrop(self.total_elapsed);
                renderer.render(&backdrop, &camera);
                backdrop.dispose();
            }
        }
    }

    /// Viewport changed: update the camera projection, then notify the active scene
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("Ignoring resize to {}x{}", width, height);
            return;
        }
        self.camera
            .borrow_mut()
            .set_aspect_ratio(width as f32 / height as f32);

        if let Some(id) = &self.active_scene_id {
            if let Some(scene) = self.scenes.get_mut(id) {
                scene.on_resize(width, height);
            }
        }
    }

    /// Registered scene ids in registration order
    pub fn scene_ids(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Configuration of the active scene
    pub fn current_scene_config(&self) -> Option<&SceneConfig> {
        self.active_scene_id.as_ref().and_then(|id| self.configs.get(id))
    }

    /// Id of the active scene, `None` while idle
    pub fn active_scene_id(&self) -> Option<&str> {
        self.active_scene_id.as_deref()
    }

    /// Whether no scene is active
    pub fn is_idle(&self) -> bool {
        self.active_scene_id.is_none()
    }

    /// Borrow the shared camera
    ///
    /// The borrow must be released before the next `update` or `on_resize`.
    pub fn camera(&self) -> Ref<'_, Camera> {
        self.camera.borrow()
    }

    /// Registered scene by id
    pub fn scene(&self, id: &str) -> Option<&dyn Scene> {
        self.scenes.get(id).map(|scene| scene.as_ref())
    }

    /// The camera controller, for inspection
    pub fn camera_controller(&self) -> &CameraController {
        &self.camera_controller
    }

    /// Seconds spent idle since the last return to home
    pub fn home_elapsed(&self) -> f32 {
        self.home_elapsed
    }

    /// Return to idle and dispose every registered scene
    pub fn dispose_all(&mut self) {
        if self.scenes.is_empty() {
            return;
        }
        self.camera_controller.stop_movement();
        if let Some(previous) = self.active_scene_id.take() {
            if let Some(scene) = self.scenes.get_mut(&previous) {
                scene.on_deactivate();
            }
        }

        let count = self.scenes.len();
        for id in self.order.drain(..) {
            if let Some(mut scene) = self.scenes.remove(&id) {
                scene.dispose();
            }
        }
        self.configs.clear();
        log::info!("Disposed {} scenes", count);
    }

    fn active_scene(&self) -> Option<&dyn Scene> {
        self.active_scene_id.as_deref().and_then(|id| self.scene(id))
    }
}

impl Drop for SceneManager {
    fn drop(&mut self) {
        self.dispose_all();
    }
}

impl std::fmt::Debug for SceneManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneManager")
            .field("scenes", &self.order)
            .field("active_scene_id", &self.active_scene_id)
            .field("camera", &self.camera.borrow())
            .field("camera_controller", &self.camera_controller)
            .field("home_elapsed", &self.home_elapsed)
            .finish_non_exhaustive()
    }
}
