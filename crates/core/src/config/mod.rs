//! Mod settings
//!
//! One persisted setting: whether the right-click toggle requires the
//! modifier key. Stored as TOML next to the mod, created with defaults
//! on first load, reloadable at runtime.

mod loader;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use loader::{mod_base_dir, settings_dir, settings_path};

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write the settings file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize settings to TOML
    #[error("Failed to serialize settings: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Could not determine the settings directory from the mod location
    #[error("Settings directory not available - could not resolve mod base path")]
    NoConfigDirectory,
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Persisted mod settings.
///
/// Loaded from `settings/righthide.toml` under the mod base directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModConfig {
    /// Settings version for future migration support
    pub version: u32,

    /// Require the modifier key to be held for the right-click toggle
    pub require_modifier: bool,
}

impl Default for ModConfig {
    fn default() -> Self {
        Self {
            version: 1,
            require_modifier: false,
        }
    }
}

impl ModConfig {
    /// Load settings from file, creating defaults if missing.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(settings_path()?)
    }

    /// Save settings to file.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(settings_path()?)
    }

    /// Reload settings from file.
    pub fn reload(&mut self) -> ConfigResult<()> {
        let content = std::fs::read_to_string(settings_path()?)?;
        *self = toml::from_str(&content)?;
        tracing::debug!("Reloaded mod settings");
        Ok(())
    }

    /// Load settings from an explicit path, creating defaults if the
    /// file does not exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            tracing::debug!("Loaded mod settings from {:?}", path);
            Ok(config)
        } else {
            let default = Self::default();
            default.save_to(path)?;
            tracing::info!("Created default mod settings at {:?}", path);
            Ok(default)
        }
    }

    /// Save settings to an explicit path.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved mod settings to {:?}", path);
        Ok(())
    }
}
