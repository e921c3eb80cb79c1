// SPDX-License-Identifier: MPL-2.0
//! This module handles the toaster configuration, loading and saving it
//! from a `toaster.toml` file.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_TOASTER_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toaster::config::{self, ToasterConfig};
//! use iced_toaster::toast::Position;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.toaster.position = Position::TopCenter;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::toast::Position;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toaster.toml";
const APP_NAME: &str = "IcedToaster";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOASTER_CONFIG_DIR";

/// Settings of the toast stack.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ToasterConfig {
    /// Anchor of the stack.
    #[serde(default)]
    pub position: Position,

    /// Number of toasts visible at once.
    #[serde(default = "default_max_toasts")]
    pub max_toasts: usize,

    /// Display time used when a toast does not set one (in milliseconds).
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u64,
}

impl ToasterConfig {
    /// Returns the capacity clamped to the supported range.
    #[must_use]
    pub fn max_toasts(&self) -> usize {
        self.max_toasts.clamp(MIN_MAX_TOASTS, MAX_MAX_TOASTS)
    }

    /// Returns the default display time. Zero selects the built-in default.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        if self.default_duration_ms == 0 {
            Duration::from_millis(DEFAULT_DURATION_MS)
        } else {
            Duration::from_millis(self.default_duration_ms)
        }
    }
}

impl Default for ToasterConfig {
    fn default() -> Self {
        Self {
            position: Position::default(),
            max_toasts: DEFAULT_MAX_TOASTS,
            default_duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

fn default_max_toasts() -> usize {
    DEFAULT_MAX_TOASTS
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

/// Root of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub toaster: ToasterConfig,
}

/// Returns the config file path, honoring an explicit base directory first,
/// then [`ENV_CONFIG_DIR`], then the platform config directory.
#[must_use]
pub fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
        .map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields defaults, a malformed one yields
/// defaults plus a warning message for the caller to surface.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "invalid toaster config, using defaults");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
