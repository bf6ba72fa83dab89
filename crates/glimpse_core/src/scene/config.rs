//! # Scene Configuration
//!
//! Pure data describing each scene's identity and scripted camera motion.
//! Configurations are authored once (built-in defaults or the catalog file),
//! validated on the way in and never mutated afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::foundation::math::{utils, Vec3};

/// Circular orbit around the world origin
///
/// `angle = elapsed * speed`; the camera sits at `(sin(angle), _, cos(angle)) * radius`
/// and bobs vertically by `sin(angle * vertical_frequency) * vertical_amplitude`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitMovement {
    /// Horizontal distance from the origin
    pub radius: f32,
    /// Angular speed in radians per second (negative orbits clockwise)
    pub speed: f32,
    /// Height of the vertical bob
    pub vertical_amplitude: f32,
    /// Bob frequency relative to the orbit angle
    pub vertical_frequency: f32,
}

/// Endless forward flight toward −Z with lateral and vertical sway
///
/// The camera advances by `forward_speed` on every update. Once `z` drops
/// below `reset_distance` it is teleported back to `reset_position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlythroughMovement {
    /// Distance travelled toward −Z per update
    pub forward_speed: f32,
    /// Sideways sway amplitude
    pub lateral_amplitude: f32,
    /// Vertical sway amplitude
    pub vertical_amplitude: f32,
    /// Sideways sway frequency in radians per second
    pub lateral_frequency: f32,
    /// Vertical sway frequency in radians per second
    pub vertical_frequency: f32,
    /// Depth below which the flight loops
    pub reset_distance: f32,
    /// Depth the camera is teleported to when the flight loops
    pub reset_position: f32,
}

/// Scripted camera movement, fixed when the configuration is authored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MovementSpec {
    /// Orbit around the origin
    Orbit(OrbitMovement),
    /// Looping forward flight
    Flythrough(FlythroughMovement),
}

impl MovementSpec {
    /// Short name of the movement kind, as written in catalog files
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Orbit(_) => "orbit",
            Self::Flythrough(_) => "flythrough",
        }
    }

    /// Check the numeric invariants of the movement
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Orbit(orbit) => {
                let values = [orbit.radius, orbit.speed, orbit.vertical_amplitude, orbit.vertical_frequency];
                if values.iter().any(|v| !v.is_finite()) {
                    return Err("orbit parameters must be finite".to_string());
                }
                if orbit.radius <= 0.0 {
                    return Err(format!("orbit radius must be positive, got {}", orbit.radius));
                }
                if orbit.speed == 0.0 {
                    return Err("orbit speed must be non-zero".to_string());
                }
            }
            Self::Flythrough(fly) => {
                let values = [
                    fly.forward_speed,
                    fly.lateral_amplitude,
                    fly.vertical_amplitude,
                    fly.lateral_frequency,
                    fly.vertical_frequency,
                    fly.reset_distance,
                    fly.reset_position,
                ];
                if values.iter().any(|v| !v.is_finite()) {
                    return Err("flythrough parameters must be finite".to_string());
                }
                if fly.forward_speed <= 0.0 {
                    return Err(format!("forward speed must be positive, got {}", fly.forward_speed));
                }
                if fly.reset_position <= fly.reset_distance {
                    return Err(format!(
                        "reset position ({}) must lie ahead of reset distance ({})",
                        fly.reset_position, fly.reset_distance
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Where the camera starts and how it moves while the scene is active
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraPath {
    /// Pose the camera snaps to on activation
    pub initial_position: Vec3,
    /// Point the camera faces on activation
    pub look_at: Vec3,
    /// Scripted motion after activation
    pub movement: MovementSpec,
}

/// Identity and camera choreography of one scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Unique key
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line description shown by hosts
    #[serde(default)]
    pub description: String,
    /// Camera choreography
    pub camera: CameraPath,
}

impl SceneConfig {
    /// Validate identity and camera path
    pub fn validate(&self) -> ShowcaseResult<()> {
        if self.id.trim().is_empty() {
            return Err(ShowcaseError::invalid_config(&self.id, "scene id must not be empty"));
        }
        if !utils::is_finite_vec3(&self.camera.initial_position) || !utils::is_finite_vec3(&self.camera.look_at) {
            return Err(ShowcaseError::invalid_config(&self.id, "camera pose must be finite"));
        }
        self.camera
            .movement
            .validate()
            .map_err(|reason| ShowcaseError::invalid_config(&self.id, reason))
    }
}

/// Scene catalog loaded once at startup
///
/// Order is preserved and becomes the navigation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneCatalog {
    /// Scene configurations in declaration order
    #[serde(default)]
    pub scenes: Vec<SceneConfig>,
}

impl SceneCatalog {
    /// Load and validate a catalog file (TOML or RON by extension)
    pub fn load(path: &str) -> ShowcaseResult<Self> {
        let catalog = Self::load_from_file(path)?;
        catalog.validate()?;
        log::info!("Loaded {} scene configs from {}", catalog.scenes.len(), path);
        Ok(catalog)
    }

    /// Validate every entry and reject duplicate ids
    pub fn validate(&self) -> ShowcaseResult<()> {
        let mut seen = HashSet::new();
        for config in &self.scenes {
            config.validate()?;
            if !seen.insert(config.id.as_str()) {
                return Err(ShowcaseError::DuplicateSceneId(config.id.clone()));
            }
        }
        Ok(())
    }

    /// Configuration for `id`
    pub fn get(&self, id: &str) -> Option<&SceneConfig> {
        self.scenes.iter().find(|config| config.id == id)
    }
}

impl Config for SceneCatalog {}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
        [[scenes]]
        id = "waterfall"
        name = "Waterfall"
        description = "Falling water under a dusk sky"

        [scenes.camera]
        initial_position = [0.0, 2.0, 8.0]
        look_at = [0.0, 0.0, 0.0]

        [scenes.camera.movement]
        type = "orbit"
        radius = 8.0
        speed = 0.005
        vertical_amplitude = 1.0
        vertical_frequency = 0.5

        [[scenes]]
        id = "nebula"
        name = "Nebula"

        [scenes.camera]
        initial_position = [0.0, 5.0, 10.0]
        look_at = [0.0, 0.0, -20.0]

        [scenes.camera.movement]
        type = "flythrough"
        forward_speed = 0.08
        lateral_amplitude = 3.0
        vertical_amplitude = 2.0
        lateral_frequency = 0.2
        vertical_frequency = 0.15
        reset_distance = -150.0
        reset_position = 50.0
    "#;

    fn orbit_config(id: &str) -> SceneConfig {
        SceneConfig {
            id: id.to_string(),
            name: id.to_string(),
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

    #[test]
    fn test_catalog_parses_in_declaration_order() {
        let catalog = SceneCatalog::from_toml_str(CATALOG).expect("catalog should parse");
        catalog.validate().expect("catalog should be valid");

        let ids: Vec<_> = catalog.scenes.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["waterfall", "nebula"]);
        assert_eq!(catalog.scenes[0].camera.movement.kind(), "orbit");
        assert_eq!(catalog.scenes[1].description, "");

        let MovementSpec::Flythrough(fly) = &catalog.scenes[1].camera.movement else {
            panic!("nebula should fly through");
        };
        assert!((fly.reset_distance + 150.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_unknown_movement_tag_is_parse_error() {
        let source = CATALOG.replace("type = \"orbit\"", "type = \"spiral\"");
        assert!(SceneCatalog::from_toml_str(&source).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = SceneCatalog {
            scenes: vec![orbit_config("a"), orbit_config("a")],
        };
        assert!(matches!(catalog.validate(), Err(ShowcaseError::DuplicateSceneId(id)) if id == "a"));
    }

    #[test]
    fn test_flythrough_with_backwards_reset_rejected() {
        let mut config = orbit_config("fly");
        config.camera.movement = MovementSpec::Flythrough(FlythroughMovement {
            forward_speed: 0.08,
            lateral_amplitude: 3.0,
            vertical_amplitude: 2.0,
            lateral_frequency: 0.2,
            vertical_frequency: 0.15,
            reset_distance: 50.0,
            reset_position: -150.0,
        });
        assert!(matches!(config.validate(), Err(ShowcaseError::InvalidConfig { .. })));
    }

    #[test]
    fn test_orbit_invariants() {
        let mut config = orbit_config("orbit");
        assert!(config.validate().is_ok());

        if let MovementSpec::Orbit(orbit) = &mut config.camera.movement {
            orbit.speed = 0.0;
        }
        assert!(config.validate().is_err());

        let mut config = orbit_config("orbit");
        config.camera.initial_position.x = f32::NAN;
        assert!(config.validate().is_err());
    }
}
