//! Configuration file handling
//!
//! Settings live in a TOML file under the user's config directory
//! (`~/.config/qss/config.toml` on Linux). Every field has a default, so a
//! missing file or a partial file is fine.

mod error;
mod migrate;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::player::Speed;
use crate::theme::ThemeName;
use crate::trace::Locale;

pub use error::ConfigError;
pub use migrate::{migrate_config, MigrateResult};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "QSS_CONFIG";

/// Largest array the player will visualize.
pub const MAX_ARRAY_SIZE: usize = 64;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub input: InputConfig,
    pub display: DisplayConfig,
}

/// Playback settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial speed, 100 (slowest) to 980 (fastest)
    pub speed: u16,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed: Speed::DEFAULT,
        }
    }
}

/// Random input settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Number of values to sort
    pub array_size: usize,
    /// Smallest sampled value (inclusive)
    pub min_value: i64,
    /// Largest sampled value (inclusive)
    pub max_value: i64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            array_size: 12,
            min_value: 15,
            max_value: 94,
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Narration language
    pub locale: Locale,
    /// Color theme
    pub theme: ThemeName,
}

impl Config {
    /// Path of the config file.
    ///
    /// `QSS_CONFIG` wins over the platform config directory.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("qss").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location, falling back to defaults if the
    /// file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)?;
        Ok(())
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let speed = self.playback.speed;
        if !(Speed::MIN..=Speed::MAX).contains(&speed) {
            return Err(ConfigError::Invalid(format!(
                "playback.speed must be between {} and {}, got {}",
                Speed::MIN,
                Speed::MAX,
                speed
            )));
        }
        let input = &self.input;
        if input.array_size == 0 || input.array_size > MAX_ARRAY_SIZE {
            return Err(ConfigError::Invalid(format!(
                "input.array_size must be between 1 and {}, got {}",
                MAX_ARRAY_SIZE, input.array_size
            )));
        }
        if input.min_value < 1 {
            return Err(ConfigError::Invalid(format!(
                "input.min_value must be positive, got {}",
                input.min_value
            )));
        }
        if input.min_value > input.max_value {
            return Err(ConfigError::Invalid(format!(
                "input.min_value ({}) exceeds input.max_value ({})",
                input.min_value, input.max_value
            )));
        }
        Ok(())
    }
}
