//! Settings path resolution
//!
//! Resolves where the mod keeps its settings file relative to where the
//! mod library was loaded from.

use std::path::PathBuf;

use super::{ConfigError, ConfigResult};

/// Returns the mod base directory by navigating up from the mod library
/// location.
///
/// The library is loaded from:
/// `Mods/RightHide/bin/righthide.(so|dll)`
///
/// This navigates up 2 levels to reach:
/// `Mods/RightHide/`
pub fn mod_base_dir() -> ConfigResult<PathBuf> {
    let exe = std::env::current_exe().map_err(ConfigError::IoError)?;

    // Navigate: righthide.so -> bin -> RightHide
    exe.parent()
        .and_then(|p| p.parent())
        .map(PathBuf::from)
        .ok_or(ConfigError::NoConfigDirectory)
}

/// Returns the settings directory.
///
/// Path: `Mods/RightHide/settings/`
pub fn settings_dir() -> ConfigResult<PathBuf> {
    Ok(mod_base_dir()?.join("settings"))
}

/// Returns the path of the mod settings file.
///
/// Path: `Mods/RightHide/settings/righthide.toml`
pub fn settings_path() -> ConfigResult<PathBuf> {
    Ok(settings_dir()?.join("righthide.toml"))
}
