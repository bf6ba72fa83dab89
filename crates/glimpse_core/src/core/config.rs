//! # Showcase Configuration
//!
//! Top-level settings the host loads once at startup: viewport size, the
//! shared camera's projection, the idle ("home") camera drift, logging and
//! the location of the scene catalog.
//!
//! Scene-specific camera choreography does not live here; it belongs to each
//! scene's [`SceneConfig`](crate::scene::SceneConfig) in the catalog.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{utils, Vec3};

// Re-export from the config module for convenience
pub use crate::config::{Config, ConfigError};

/// # Viewport Configuration
///
/// Initial drawable size in pixels. Hosts forward later changes through
/// `SceneManager::on_resize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ViewportConfig {
    /// Width divided by height
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// # Camera Settings
///
/// Projection parameters and resting position of the single shared camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
    /// Where the camera sits before anything moves it
    pub initial_position: Vec3,
}

impl CameraSettings {
    /// Validate the projection parameters
    pub fn validate(&self) -> Result<(), String> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(format!("Field of view must be within (0, 180) degrees, got {}", self.fov_degrees));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(format!("Clip planes must satisfy 0 < near < far, got near={} far={}", self.near, self.far));
        }
        if !utils::is_finite_vec3(&self.initial_position) {
            return Err("Initial camera position must be finite".to_string());
        }
        Ok(())
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            initial_position: Vec3::new(0.0, 0.0, 5.0),
        }
    }
}

/// # Home Camera Configuration
///
/// The built-in slow circular drift used while no scene is active:
/// `angle = elapsed * speed`, the camera circles the origin at `radius`,
/// bobbing around `height` by `vertical_amplitude`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeCameraConfig {
    /// Orbit radius around the origin
    pub radius: f32,
    /// Base height of the drift
    pub height: f32,
    /// Angular speed in radians per second
    pub speed: f32,
    /// Vertical bob amplitude
    pub vertical_amplitude: f32,
    /// Vertical bob frequency relative to the orbit angle
    pub vertical_frequency: f32,
}

impl HomeCameraConfig {
    /// Validate the drift parameters
    pub fn validate(&self) -> Result<(), String> {
        let values = [
            self.radius,
            self.height,
            self.speed,
            self.vertical_amplitude,
            self.vertical_frequency,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err("Home camera parameters must be finite".to_string());
        }
        if self.radius <= 0.0 {
            return Err(format!("Home camera radius must be positive, got {}", self.radius));
        }
        Ok(())
    }
}

impl Default for HomeCameraConfig {
    fn default() -> Self {
        // 0.005 rad per frame at 60 fps
        Self {
            radius: 8.0,
            height: 2.0,
            speed: 0.3,
            vertical_amplitude: 1.0,
            vertical_frequency: 0.5,
        }
    }
}

/// # Logging Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level (`RUST_LOG` still overrides it)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// # Complete Showcase Configuration
///
/// Top-level configuration that encompasses all subsystems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Initial viewport
    pub viewport: ViewportConfig,
    /// Shared camera projection
    pub camera: CameraSettings,
    /// Idle camera drift
    pub home: HomeCameraConfig,
    /// Logging setup
    pub logging: LoggingConfig,
    /// Path of the scene catalog file (TOML or RON)
    pub catalog_path: String,
}

impl ShowcaseConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err("Viewport dimensions must be non-zero".to_string());
        }
        self.camera.validate()?;
        self.home.validate()?;
        Ok(())
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            camera: CameraSettings::default(),
            home: HomeCameraConfig::default(),
            logging: LoggingConfig::default(),
            catalog_path: "resources/scenes.toml".to_string(),
        }
    }
}

impl Config for ShowcaseConfig {}
