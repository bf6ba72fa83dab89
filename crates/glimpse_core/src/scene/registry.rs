//! Scene registry
//!
//! Constant lookup table from scene id to its configuration and a factory.
//! It is filled once at startup and only read afterwards.

use crate::error::{ShowcaseError, ShowcaseResult};
use crate::foundation::time::Stopwatch;
use crate::scene::{Scene, SceneCatalog, SceneConfig};
use crate::scenes;

/// Constructs a fresh, uninitialized scene
pub type SceneFactory = Box<dyn Fn() -> Box<dyn Scene>>;

/// One registered scene
pub struct SceneEntry {
    config: SceneConfig,
    factory: SceneFactory,
}

impl SceneEntry {
    /// The scene's configuration
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}

impl std::fmt::Debug for SceneEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneEntry").field("config", &self.config).finish_non_exhaustive()
    }
}

/// Ordered table of scene configurations and factories
#[derive(Debug, Default)]
pub struct SceneRegistry {
    entries: Vec<SceneEntry>,
}

impl SceneRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in scenes with their default configurations
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for config in scenes::default_configs() {
            if let Some(factory) = scenes::builtin_factory(&config.id) {
                // Defaults are known-good; a failure here is a bug in the table
                if let Err(e) = registry.register(config, factory) {
                    log::error!("Built-in scene rejected: {}", e);
                }
            }
        }
        registry
    }

    /// Pair every catalog entry with a factory resolved by id
    ///
    /// Fails with [`ShowcaseError::UnknownSceneId`] when no factory exists
    /// for a catalog id.
    pub fn from_catalog<F>(catalog: &SceneCatalog, resolve: F) -> ShowcaseResult<Self>
    where
        F: Fn(&str) -> Option<SceneFactory>,
    {
        let mut registry = Self::new();
        for config in &catalog.scenes {
            let factory = resolve(&config.id).ok_or_else(|| ShowcaseError::UnknownSceneId(config.id.clone()))?;
            registry.register(config.clone(), factory)?;
        }
        Ok(registry)
    }

    /// Add an entry; rejects invalid configurations and duplicate ids
    pub fn register(&mut self, config: SceneConfig, factory: SceneFactory) -> ShowcaseResult<()> {
        config.validate()?;
        if self.lookup(&config.id).is_some() {
            return Err(ShowcaseError::DuplicateSceneId(config.id));
        }
        log::debug!("Registered scene '{}' ({})", config.id, config.camera.movement.kind());
        self.entries.push(SceneEntry { config, factory });
        Ok(())
    }

    /// Configurations in declaration order
    pub fn list(&self) -> impl Iterator<Item = &SceneConfig> {
        self.entries.iter().map(SceneEntry::config)
    }

    /// Scene ids in declaration order
    pub fn ids(&self) -> Vec<&str> {
        self.list().map(|config| config.id.as_str()).collect()
    }

    /// Configuration for `id`
    pub fn lookup(&self, id: &str) -> Option<&SceneConfig> {
        self.list().find(|config| config.id == id)
    }

    /// Number of registered scenes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no scene is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Construct a scene without initializing it
    pub fn instantiate(&self, id: &str) -> ShowcaseResult<Box<dyn Scene>> {
        self.entries
            .iter()
            .find(|entry| entry.config.id == id)
            .map(|entry| (entry.factory)())
            .ok_or_else(|| ShowcaseError::UnknownSceneId(id.to_string()))
    }

    /// Construct a scene and run its `init` to completion
    pub async fn create(&self, id: &str) -> ShowcaseResult<Box<dyn Scene>> {
        let mut scene = self.instantiate(id)?;
        initialize(id, scene.as_mut()).await?;
        Ok(scene)
    }
}

/// Await a scene's `init`, disposing whatever it built if it fails
pub(crate) async fn initialize(id: &str, scene: &mut dyn Scene) -> ShowcaseResult<()> {
    let stopwatch = Stopwatch::start_new();
    match scene.init().await {
        Ok(()) => {
            log::info!(
                "Scene '{}' initialized in {:.1}ms ({} nodes)",
                id,
                stopwatch.elapsed_millis(),
                scene.graph().node_count()
            );
            Ok(())
        }
        Err(source) => {
            log::warn!("Scene '{}' failed to initialize: {}", id, source);
            scene.dispose();
            Err(ShowcaseError::SceneInitialization {
                id: id.to_string(),
                source,
            })
        }
    }
}
