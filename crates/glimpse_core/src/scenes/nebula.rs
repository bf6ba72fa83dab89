//! Nebula: an endless flight through glowing gas ribbons
//!
//! Ribbons drift in slow rotation and their shaders track the camera
//! position, read each frame through the shared camera handle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SceneInitError;
use crate::foundation::math::{constants::PI, constants::TAU, Transform, Vec3};
use crate::scene::{
    BaseScene, CameraPath, FlythroughMovement, Geometry, InitFuture, Light, LightKind, Material, MovementSpec,
    NodeKind, Scene, SceneConfig, SceneGraph, SceneNode, Uniform,
};

use super::{placed, DEFAULT_SEED};

/// Scene id
pub const ID: &str = "nebula";

const STAR_COUNT: usize = 5000;
const MAIN_RIBBONS: usize = 8;
const WISP_RIBBONS: usize = 6;

/// Default configuration: a looping flight toward −Z
pub fn default_config() -> SceneConfig {
    SceneConfig {
        id: ID.to_string(),
        name: "Cosmic Nebula".to_string(),
        description: "Glide through interstellar space past delicate faceted nebulae".to_string(),
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

/// Per-axis spin rate of the ribbon at `index`, alternating direction
fn ribbon_spin(index: usize) -> Vec3 {
    let sign = |period: usize| -> f32 { if index % period == 0 { 1.0 } else { -1.0 } };
    Vec3::new(0.1 * sign(2), 0.05 * sign(3), 0.08 * sign(4))
}

fn ribbon_material(name: String, shader: &str) -> Material {
    Material::animated(name, shader).with_uniform("camera_position", Uniform::Vec3(Vec3::zeros()))
}

/// Nebula scene
pub struct NebulaScene {
    base: BaseScene,
    seed: u64,
}

impl Default for NebulaScene {
    fn default() -> Self {
        Self::new()
    }
}

impl NebulaScene {
    /// Scene laid out with the default seed
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Scene laid out with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            base: BaseScene::new(ID),
            seed,
        }
    }

    fn build(&self) -> SceneGraph {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut graph = SceneGraph::new(ID);

        graph.add(
            SceneNode::mesh("sky", Geometry::sphere("sky", 64, 32), Material::animated("sky", "nebula_sky"))
                .with_transform(Transform::identity().with_uniform_scale(200.0)),
        );

        graph.add(SceneNode::points(
            "stars",
            Geometry::points("stars", STAR_COUNT),
            Material::animated("stars", "twinkling_stars"),
        ));

        let mut ribbons = SceneNode::group("ribbons");
        for i in 0..MAIN_RIBBONS {
            let position = Vec3::new(rng.gen_range(-15.0..15.0), rng.gen_range(-10.0..10.0), rng.gen_range(-45.0..-15.0));
            let mut transform = placed(position, Vec3::new(15.0, 8.0, 1.0));
            transform.rotate_euler(rng.gen_range(0.0..PI), rng.gen_range(0.0..PI), rng.gen_range(0.0..PI));

            ribbons.children.push(
                SceneNode::mesh(
                    format!("ribbon_{i}"),
                    Geometry::plane("ribbon", 32, 16),
                    ribbon_material(format!("ribbon_{i}"), "nebula_ribbon"),
                )
                .with_transform(transform),
            );
        }
        for i in 0..WISP_RIBBONS {
            let position = Vec3::new(rng.gen_range(-25.0..25.0), rng.gen_range(-15.0..15.0), rng.gen_range(-70.0..-20.0));
            let mut transform = placed(position, Vec3::new(8.0, 3.0, 1.0));
            transform.rotate_euler(rng.gen_range(0.0..TAU), rng.gen_range(0.0..TAU), rng.gen_range(0.0..TAU));

            ribbons.children.push(
                SceneNode::mesh(
                    format!("wisp_{i}"),
                    Geometry::plane("wisp", 16, 8),
                    ribbon_material(format!("wisp_{i}"), "nebula_wisp"),
                )
                .with_transform(transform),
            );
        }
        graph.add(ribbons);

        graph.add(SceneNode::light("ambient", Light::from_hex(LightKind::Ambient, 0x40_4080, 0.1)));
        graph.add(
            SceneNode::light("starlight", Light::from_hex(LightKind::Directional, 0xff_ffff, 0.3))
                .with_transform(Transform::from_position(Vec3::new(50.0, 30.0, 20.0))),
        );
        let glows = [
            (0xff_4080, Vec3::new(-20.0, 10.0, -15.0)),
            (0x40_80ff, Vec3::new(15.0, -5.0, -25.0)),
            (0x80_ff40, Vec3::new(5.0, 20.0, -35.0)),
        ];
        for (i, (color, position)) in glows.into_iter().enumerate() {
            graph.add(
                SceneNode::light(format!("glow_{i}"), Light::from_hex(LightKind::Point { range: 50.0 }, color, 2.0))
                    .with_transform(Transform::from_position(position)),
            );
        }

        graph
    }

    fn populate(&mut self) -> Result<(), SceneInitError> {
        self.base.begin_init()?;
        let graph = self.build();
        self.base.finish_init(graph);
        Ok(())
    }
}

impl Scene for NebulaScene {
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
        let Some(time) = self.base.advance(dt) else {
            return;
        };
        let camera = self.base.camera();
        let camera_position = camera.as_ref().map(|camera| camera.borrow().position);

        let graph = self.base.graph_mut();
        graph.set_uniform_all("time", &Uniform::Float(time));
        if let Some(position) = camera_position {
            graph.set_uniform_all("camera_position", &Uniform::Vec3(position));
        }

        if let Some(ribbons) = graph.find_mut("ribbons") {
            for (index, ribbon) in ribbons.children.iter_mut().enumerate() {
                let spin = ribbon_spin(index) * dt;
                ribbon.transform.rotate_euler(spin.x, spin.y, spin.z);
            }
        }
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        log::debug!("Nebula viewport {}x{}", width, height);
    }
}
