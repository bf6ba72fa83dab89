//! # 3D Camera
//!
//! The single perspective camera shared by every scene. Scripted movement
//! and the idle drift mutate it; the renderer only reads it.
//!
//! ## Coordinate System
//! Right-handed, Y-up: X+ right, Y+ up, Z+ toward the viewer. A camera
//! flying "forward" therefore moves toward −Z.

use crate::core::config::CameraSettings;
use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// 3D perspective camera
///
/// Orientation is expressed as a look-at target plus an up vector, which is
/// exactly what scripted movement produces every frame. Matrices are computed
/// on demand rather than cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a new perspective camera looking at the origin
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Vertical field of view in degrees
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::y(),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Create the shared camera from configuration
    pub fn from_settings(settings: &CameraSettings, aspect: f32) -> Self {
        Self::perspective(
            settings.initial_position,
            settings.fov_degrees,
            aspect,
            settings.near,
            settings.far,
        )
    }

    /// Update camera position in world space
    ///
    /// The target is left untouched, so the view direction changes.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Point the camera at a world-space target, keeping the up vector
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Snap the camera to a pose in one call
    pub fn set_pose(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
        log::trace!("Camera pose: position {:?}, target {:?}", position, target);
    }

    /// Unit vector from the camera toward its target
    ///
    /// Falls back to −Z when position and target coincide.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position)
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(|| -Vec3::z())
    }

    /// Update camera aspect ratio for viewport changes
    ///
    /// Only logs when the difference is significant (> 0.01) to reduce log
    /// noise during window resize events.
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// World-to-camera transformation
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// Perspective projection for the current aspect ratio
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }

    /// Combined projection × view matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for Camera {
    /// Camera five units in front of the origin with a 75° field of view
    fn default() -> Self {
        Self::from_settings(&CameraSettings::default(), 16.0 / 9.0)
    }
}
