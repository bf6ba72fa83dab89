//! Waterfall: a shader-driven cascade under a dusk sky
//!
//! The camera orbits the falls slowly. Every shader surface shares the
//! scene clock through its `time` uniform.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SceneInitError;
use crate::foundation::math::{constants::HALF_PI, constants::PI, Transform, Vec3};
use crate::scene::{
    BaseScene, CameraPath, Geometry, InitFuture, Light, LightKind, Material, MovementSpec, OrbitMovement, Scene,
    SceneConfig, SceneGraph, SceneNode, Uniform,
};

use super::{placed, DEFAULT_SEED};

/// Scene id
pub const ID: &str = "waterfall";

const ROCK_COUNT: usize = 15;
const MIST_PARTICLES: usize = 1000;

/// Default configuration: a slow orbit around the falls
pub fn default_config() -> SceneConfig {
    SceneConfig {
        id: ID.to_string(),
        name: "Dream Waterfall".to_string(),
        description: "Flowing light and color woven into a dreamlike cascade".to_string(),
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

/// Waterfall scene
pub struct WaterfallScene {
    base: BaseScene,
    seed: u64,
}

impl Default for WaterfallScene {
    fn default() -> Self {
        Self::new()
    }
}

impl WaterfallScene {
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
            SceneNode::mesh(
                "sky",
                Geometry::sphere("sky", 32, 16),
                Material::animated("sky", "waterfall_sky"),
            )
            .with_transform(Transform::identity().with_uniform_scale(100.0)),
        );

        let mut ground = placed(Vec3::new(0.0, -8.0, 0.0), Vec3::new(50.0, 50.0, 1.0));
        ground.rotate_euler(-HALF_PI, 0.0, 0.0);
        graph.add(
            SceneNode::mesh(
                "ground",
                Geometry::plane("ground", 64, 64),
                Material::animated("ground", "rolling_terrain"),
            )
            .with_transform(ground),
        );

        let mut rocks = SceneNode::group("rocks");
        for i in 0..ROCK_COUNT {
            let radius = rng.gen_range(0.5..2.5);
            let position = Vec3::new(rng.gen_range(-15.0..15.0), rng.gen_range(-6.0..-2.0), rng.gen_range(-15.0..15.0));
            let color = [rng.gen_range(0.2..0.4), rng.gen_range(0.15..0.3), rng.gen_range(0.3..0.5)];
            let transform = Transform::from_position_euler(
                position,
                rng.gen_range(0.0..PI),
                rng.gen_range(0.0..PI),
                rng.gen_range(0.0..PI),
            )
            .with_uniform_scale(radius);

            rocks.children.push(
                SceneNode::mesh(
                    format!("rock_{i}"),
                    Geometry::new("dodecahedron", 20),
                    Material::standard(format!("rock_{i}"), color),
                )
                .with_transform(transform),
            );
        }
        graph.add(rocks);

        graph.add(
            SceneNode::mesh(
                "falls",
                Geometry::plane("falls", 64, 128),
                Material::animated("falls", "waterfall_flow")
                    .with_uniform("resolution", Uniform::Vec3(Vec3::new(512.0, 1024.0, 0.0))),
            )
            .with_transform(placed(Vec3::zeros(), Vec3::new(6.0, 12.0, 1.0))),
        );

        graph.add(SceneNode::points(
            "mist",
            Geometry::points("mist", MIST_PARTICLES),
            Material::animated("mist", "falling_particles"),
        ));

        graph.add(SceneNode::light("ambient", Light::from_hex(LightKind::Ambient, 0x40_4080, 0.3)));
        graph.add(
            SceneNode::light("key", Light::from_hex(LightKind::Directional, 0x80_80ff, 0.8))
                .with_transform(Transform::from_position(Vec3::new(-5.0, 10.0, 5.0))),
        );
        graph.add(
            SceneNode::light("fill", Light::from_hex(LightKind::Directional, 0xff_8080, 0.3))
                .with_transform(Transform::from_position(Vec3::new(5.0, -5.0, -5.0))),
        );

        graph
    }

    fn populate(&mut self) -> Result<(), SceneInitError> {
        self.base.begin_init()?;
        let graph = self.build();
        self.base.finish_init(graph);
        Ok(())
    }
}

impl Scene for WaterfallScene {
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
        if let Some(time) = self.base.advance(dt) {
            self.base.graph_mut().set_uniform_all("time", &Uniform::Float(time));
        }
    }
}
