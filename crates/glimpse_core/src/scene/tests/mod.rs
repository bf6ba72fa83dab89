//! Lifecycle scenarios across the registry, manager, controller and scenes
//!
//! Scenes here are probes that record every lifecycle call into a shared
//! event log; the renderer records what it was asked to draw.

mod lifecycle;

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::config::ShowcaseConfig;
use crate::error::SceneInitError;
use crate::foundation::math::Vec3;
use crate::foundation::time::FixedStepClock;
use crate::render::{Camera, Renderer};
use crate::scene::{
    BaseScene, CameraPath, CameraRef, FlythroughMovement, Geometry, InitFuture, Material, MovementSpec,
    OrbitMovement, Scene, SceneConfig, SceneFactory, SceneGraph, SceneManager, SceneNode, SceneRegistry,
};

type EventLog = Rc<RefCell<Vec<String>>>;

fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

fn drain(log: &EventLog) -> Vec<String> {
    log.borrow_mut().drain(..).collect()
}

struct ProbeScene {
    base: BaseScene,
    id: String,
    log: EventLog,
    fail_init: bool,
}

impl ProbeScene {
    fn new(id: &str, log: &EventLog) -> Self {
        Self {
            base: BaseScene::new(id),
            id: id.to_string(),
            log: Rc::clone(log),
            fail_init: false,
        }
    }

    fn failing(id: &str, log: &EventLog) -> Self {
        Self {
            fail_init: true,
            ..Self::new(id, log)
        }
    }

    fn record(&self, event: &str) {
        self.log.borrow_mut().push(format!("{}:{}", self.id, event));
    }

    fn populate(&mut self) -> Result<(), SceneInitError> {
        self.base.begin_init()?;
        let has_camera = self.base.camera().is_some();
        self.record(&format!("init camera={}", has_camera));
        if self.fail_init {
            return Err(SceneInitError::Build("probe refused".to_string()));
        }

        let mut graph = SceneGraph::new(self.id.clone());
        graph.add(SceneNode::mesh(
            "surface",
            Geometry::plane("surface", 4, 4),
            Material::animated("surface", "probe"),
        ));
        self.base.finish_init(graph);
        Ok(())
    }
}

impl Scene for ProbeScene {
    fn base(&self) -> &BaseScene {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseScene {
        &mut self.base
    }

    fn init(&mut self) -> InitFuture<'_> {
        Box::pin(async move { self.populate() })
    }

    fn update(&mut self, dt: f32) {
        if self.base.advance(dt).is_some() {
            self.record("update");
        }
    }

    fn set_camera(&mut self, camera: CameraRef) {
        self.record("camera");
        self.base.set_camera(camera);
    }

    fn on_activate(&mut self) {
        self.record("activate");
    }

    fn on_deactivate(&mut self) {
        self.record("deactivate");
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.record(&format!("resize {}x{}", width, height));
    }

    fn dispose(&mut self) {
        if !self.base.is_disposed() {
            self.record("dispose");
        }
        self.base.dispose();
    }
}

#[derive(Debug, Clone, PartialEq)]
struct RenderedFrame {
    graph: String,
    drawables: usize,
    camera_position: Vec3,
}

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<RenderedFrame>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, graph: &SceneGraph, camera: &Camera) {
        self.frames.push(RenderedFrame {
            graph: graph.root().name.clone(),
            drawables: graph.drawable_count(),
            camera_position: camera.position,
        });
    }
}

fn orbit_config(id: &str) -> SceneConfig {
    SceneConfig {
        id: id.to_string(),
        name: format!("Orbit {}", id),
        description: String::new(),
        camera: CameraPath {
            initial_position: Vec3::new(0.0, 2.0, 8.0),
            look_at: Vec3::zeros(),
            movement: MovementSpec::Orbit(OrbitMovement {
                radius: 8.0,
                speed: 0.005,
                vertical_amplitude: 1.0,
                vertical_frequency: 0.5,
            }),
        },
    }
}

fn flythrough_config(id: &str) -> SceneConfig {
    SceneConfig {
        id: id.to_string(),
        name: format!("Flythrough {}", id),
        description: String::new(),
        camera: CameraPath {
            initial_position: Vec3::new(0.0, 5.0, 10.0),
            look_at: Vec3::new(0.0, 0.0, -20.0),
            movement: MovementSpec::Flythrough(FlythroughMovement {
                forward_speed: 0.08,
                lateral_amplitude: 3.0,
                vertical_amplitude: 2.0,
                lateral_frequency: 0.2,
                vertical_frequency: 0.15,
                reset_distance: -150.0,
                reset_position: 50.0,
            }),
        },
    }
}

/// Manager ticking at a fixed 60 fps
fn manager() -> SceneManager {
    manager_with_step(1.0 / 60.0)
}

fn manager_with_step(step: f32) -> SceneManager {
    SceneManager::with_clock(&ShowcaseConfig::default(), Box::new(FixedStepClock::new(step)))
}

fn ready_probe(id: &str, log: &EventLog) -> Box<dyn Scene> {
    let mut scene = ProbeScene::new(id, log);
    pollster::block_on(scene.init()).expect("probe init");
    Box::new(scene)
}

/// Initialize a probe and register it, then clear the log
fn add_probe(manager: &mut SceneManager, config: SceneConfig, log: &EventLog) {
    let id = config.id.clone();
    manager
        .add_scene(&id, ready_probe(&id, log), config)
        .expect("probe registration");
    drain(log);
}

fn probe_factory(id: &'static str, log: &EventLog, fail: bool) -> SceneFactory {
    let log = Rc::clone(log);
    Box::new(move || -> Box<dyn Scene> {
        if fail {
            Box::new(ProbeScene::failing(id, &log))
        } else {
            Box::new(ProbeScene::new(id, &log))
        }
    })
}
