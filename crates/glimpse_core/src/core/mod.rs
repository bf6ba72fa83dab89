//! # Core Module
//!
//! Shared abstractions the rest of the showcase depends on.
//!
//! ## Organization
//!
//! - **Config**: Top-level showcase configuration (viewport, camera, home drift, logging)
//! - **Foundation**: Low-level utilities (math, time, logging)

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    CameraSettings,
    Config,
    ConfigError,
    HomeCameraConfig,
    LoggingConfig,
    ShowcaseConfig,
    ViewportConfig,
};
