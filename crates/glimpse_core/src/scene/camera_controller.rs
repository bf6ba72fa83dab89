//! Scripted camera movement
//!
//! The controller owns the camera's trajectory while a scene is active. It
//! holds no camera itself: the manager lends the shared camera for the
//! duration of each call.

use crate::foundation::math::Vec3;
use crate::render::Camera;
use crate::scene::{FlythroughMovement, MovementSpec, OrbitMovement, SceneConfig};

/// Camera position on an orbit after `elapsed` seconds
pub fn orbit_position(orbit: &OrbitMovement, elapsed: f32) -> Vec3 {
    let angle = elapsed * orbit.speed;
    Vec3::new(
        angle.sin() * orbit.radius,
        (angle * orbit.vertical_frequency).sin() * orbit.vertical_amplitude,
        angle.cos() * orbit.radius,
    )
}

/// Advance a flythrough by one step
///
/// Returns the new position and look-at target. The target is derived from
/// the position after any loop reset so the view keeps facing forward.
pub fn flythrough_step(fly: &FlythroughMovement, position: Vec3, elapsed: f32) -> (Vec3, Vec3) {
    let mut next = Vec3::new(
        (elapsed * fly.lateral_frequency).sin() * fly.lateral_amplitude,
        (elapsed * fly.vertical_frequency).cos() * fly.vertical_amplitude,
        position.z - fly.forward_speed,
    );
    if next.z < fly.reset_distance {
        log::debug!("Flythrough loop: z {:.2} -> {:.2}", next.z, fly.reset_position);
        next.z = fly.reset_position;
    }

    let target = Vec3::new((elapsed * 0.1).sin() * 5.0, (elapsed * 0.15).cos() * 3.0, next.z - 10.0);
    (next, target)
}

/// Drives the shared camera along a scene's scripted movement
#[derive(Debug, Clone, Default)]
pub struct CameraController {
    current_movement: Option<MovementSpec>,
    movement_elapsed: f32,
}

impl CameraController {
    /// Idle controller
    pub fn new() -> Self {
        Self::default()
    }

    /// Snap the camera to the scene's initial pose and start its movement
    ///
    /// Any movement already running is stopped first, so this can be called
    /// back to back while the host switches scenes.
    pub fn start_movement(&mut self, camera: &mut Camera, config: &SceneConfig) {
        self.stop_movement();

        camera.set_pose(config.camera.initial_position, config.camera.look_at);
        self.movement_elapsed = 0.0;
        self.current_movement = Some(config.camera.movement.clone());

        log::debug!("Started {} movement for '{}'", config.camera.movement.kind(), config.id);
    }

    /// Stop moving; the camera stays where it is
    pub fn stop_movement(&mut self) {
        if self.current_movement.take().is_some() {
            log::debug!("Camera movement stopped after {:.2}s", self.movement_elapsed);
        }
    }

    /// Advance the active movement by `dt` seconds
    pub fn update(&mut self, camera: &mut Camera, dt: f32) {
        let Some(movement) = &self.current_movement else {
            return;
        };
        self.movement_elapsed += dt;

        match movement {
            MovementSpec::Orbit(orbit) => {
                camera.set_pose(orbit_position(orbit, self.movement_elapsed), Vec3::zeros());
            }
            MovementSpec::Flythrough(fly) => {
                let (position, target) = flythrough_step(fly, camera.position, self.movement_elapsed);
                camera.set_pose(position, target);
            }
        }
    }

    /// Whether a movement is running
    pub fn is_active(&self) -> bool {
        self.current_movement.is_some()
    }

    /// Seconds since the current movement started
    pub fn movement_elapsed(&self) -> f32 {
        self.movement_elapsed
    }

    /// The running movement
    pub fn current_movement(&self) -> Option<&MovementSpec> {
        self.current_movement.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::TAU;
    use crate::scene::CameraPath;
    use approx::assert_relative_eq;

    fn orbit(speed: f32, vertical_frequency: f32) -> OrbitMovement {
        OrbitMovement {
            radius: 8.0,
            speed,
            vertical_amplitude: 1.0,
            vertical_frequency,
        }
    }

    fn flythrough() -> FlythroughMovement {
        FlythroughMovement {
            forward_speed: 0.08,
            lateral_amplitude: 3.0,
            vertical_amplitude: 2.0,
            lateral_frequency: 0.2,
            vertical_frequency: 0.15,
            reset_distance: -150.0,
            reset_position: 50.0,
        }
    }

    fn config(movement: MovementSpec, initial_position: Vec3, look_at: Vec3) -> SceneConfig {
        SceneConfig {
            id: "test".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            camera: CameraPath {
                initial_position,
                look_at,
                movement,
            },
        }
    }

    #[test]
    fn test_start_snaps_to_initial_pose() {
        let mut camera = Camera::default();
        let mut controller = CameraController::new();
        let config = config(
            MovementSpec::Flythrough(flythrough()),
            Vec3::new(0.0, 5.0, 10.0),
            Vec3::new(0.0, 0.0, -20.0),
        );

        controller.start_movement(&mut camera, &config);

        assert!(controller.is_active());
        assert_eq!(camera.position, Vec3::new(0.0, 5.0, 10.0));
        assert_eq!(camera.target, Vec3::new(0.0, 0.0, -20.0));
        assert!(controller.movement_elapsed().abs() < f32::EPSILON);
    }

    #[test]
    fn test_restart_resets_elapsed() {
        let mut camera = Camera::default();
        let mut controller = CameraController::new();
        let config = config(MovementSpec::Orbit(orbit(0.5, 0.5)), Vec3::new(0.0, 2.0, 8.0), Vec3::zeros());

        controller.start_movement(&mut camera, &config);
        controller.update(&mut camera, 3.0);
        assert_relative_eq!(controller.movement_elapsed(), 3.0);

        controller.start_movement(&mut camera, &config);
        assert!(controller.movement_elapsed().abs() < f32::EPSILON);
        assert_eq!(camera.position, Vec3::new(0.0, 2.0, 8.0));
    }

    #[test]
    fn test_stop_leaves_camera_in_place() {
        let mut camera = Camera::default();
        let mut controller = CameraController::new();
        let config = config(MovementSpec::Orbit(orbit(0.5, 0.5)), Vec3::new(0.0, 2.0, 8.0), Vec3::zeros());

        controller.start_movement(&mut camera, &config);
        controller.update(&mut camera, 1.0);
        let parked = camera.position;

        controller.stop_movement();
        controller.stop_movement();
        controller.update(&mut camera, 1.0);

        assert!(!controller.is_active());
        assert!(controller.current_movement().is_none());
        assert_eq!(camera.position, parked);
    }

    #[test]
    fn test_orbit_matches_closed_form() {
        let mut camera = Camera::default();
        let mut controller = CameraController::new();
        let config = config(MovementSpec::Orbit(orbit(0.005, 0.5)), Vec3::new(0.0, 2.0, 8.0), Vec3::zeros());

        controller.start_movement(&mut camera, &config);
        for _ in 0..1000 {
            controller.update(&mut camera, 1.0);
        }

        assert_relative_eq!(camera.position.x, (1000.0_f32 * 0.005).sin() * 8.0, epsilon = 1e-6);
        assert_relative_eq!(camera.position.z, (1000.0_f32 * 0.005).cos() * 8.0, epsilon = 1e-6);
        assert_eq!(camera.target, Vec3::zeros());
    }

    #[test]
    fn test_orbit_is_periodic() {
        let speed = 0.5;
        let period = TAU / speed;

        // Horizontal position repeats every period regardless of the bob frequency
        let half_bob = orbit(speed, 0.5);
        let a = orbit_position(&half_bob, 1.3);
        let b = orbit_position(&half_bob, 1.3 + period);
        assert_relative_eq!(a.x, b.x, epsilon = 1e-4);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-4);

        // With an integer bob frequency the full position repeats
        let whole_bob = orbit(speed, 2.0);
        assert_relative_eq!(
            orbit_position(&whole_bob, 1.3),
            orbit_position(&whole_bob, 1.3 + period),
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_flythrough_descends_then_loops() {
        let fly = FlythroughMovement {
            forward_speed: 1.0,
            reset_distance: -3.0,
            reset_position: 5.0,
            ..flythrough()
        };
        let mut camera = Camera::default();
        let mut controller = CameraController::new();
        let config = config(MovementSpec::Flythrough(fly), Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -10.0));
        controller.start_movement(&mut camera, &config);

        let mut samples = Vec::new();
        for _ in 0..4 {
            controller.update(&mut camera, 1.0 / 60.0);
            samples.push(camera.position.z);
        }

        assert_eq!(samples[..3], [-1.0, -2.0, -3.0]);
        assert!((samples[3] - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_flythrough_looks_ahead_after_loop() {
        let fly = FlythroughMovement {
            forward_speed: 1.0,
            reset_distance: -1.5,
            reset_position: 5.0,
            ..flythrough()
        };
        let (position, target) = flythrough_step(&fly, Vec3::new(0.0, 0.0, -1.0), 2.0);

        assert!((position.z - 5.0).abs() < f32::EPSILON);
        assert!((target.z - (-5.0)).abs() < f32::EPSILON);
        assert_relative_eq!(position.x, (2.0_f32 * 0.2).sin() * 3.0);
        assert_relative_eq!(position.y, (2.0_f32 * 0.15).cos() * 2.0);
    }
}
