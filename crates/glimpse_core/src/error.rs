//! Showcase-level errors
//!
//! Every failure in the core is local to the operation that raised it. A
//! rejected call leaves the scene manager in the state it had before.

use thiserror::Error;

use crate::config::ConfigError;

/// Result alias for showcase operations
pub type ShowcaseResult<T> = Result<T, ShowcaseError>;

/// Errors raised by the registry, the scene manager and catalog loading
#[derive(Error, Debug)]
pub enum ShowcaseError {
    /// No scene or configuration is registered under this id
    #[error("Unknown scene id: {0}")]
    UnknownSceneId(String),

    /// A scene or configuration with this id already exists
    #[error("Duplicate scene id: {0}")]
    DuplicateSceneId(String),

    /// A scene's `init()` failed; the scene was not registered
    #[error("Scene '{id}' failed to initialize: {source}")]
    SceneInitialization {
        /// Id of the scene that failed
        id: String,
        /// Failure reported by the scene
        #[source]
        source: SceneInitError,
    },

    /// A scene was handed over before its `init()` completed
    #[error("Scene '{0}' has not completed initialization")]
    SceneNotReady(String),

    /// A scene configuration violates its invariants
    #[error("Invalid configuration for scene '{id}': {reason}")]
    InvalidConfig {
        /// Id of the offending scene configuration
        id: String,
        /// What is wrong with it
        reason: String,
    },

    /// Loading or parsing a configuration file failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Failures a scene may report from `init()`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneInitError {
    /// `init()` was called a second time
    #[error("scene is already initialized")]
    AlreadyInitialized,

    /// `init()` was called after `dispose()`
    #[error("scene has been disposed")]
    Disposed,

    /// Building the scene's sub-graph failed
    #[error("failed to build scene content: {0}")]
    Build(String),
}

impl ShowcaseError {
    /// Build an `InvalidConfig` error
    pub fn invalid_config(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
