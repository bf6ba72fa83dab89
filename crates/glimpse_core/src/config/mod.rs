//! Configuration file handling
//!
//! Showcase settings and scene catalogs are plain serde types. The file
//! format is picked from the extension: `.toml` or `.ron`.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML (`.toml`)
    Toml,
    /// Rusty Object Notation (`.ron`)
    Ron,
}

impl ConfigFormat {
    /// Format implied by a file's extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Serde-backed configuration loaded from and saved to disk
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a `.toml` or `.ron` file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        log::debug!("Loading configuration from {}", path.display());

        match format {
            ConfigFormat::Toml => Self::from_toml_str(&contents),
            ConfigFormat::Ron => Self::from_ron_str(&contents),
        }
    }

    /// Parse configuration from TOML text
    fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse configuration from RON text
    fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Write configuration to a `.toml` or `.ron` file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents do not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// The value could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// The file extension is neither `.toml` nor `.ron`
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
