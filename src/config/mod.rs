//! Application configuration.
//!
//! Loads an optional JSON file from the platform config directory, or from
//! the path in `PROFILE_PAGE_CONFIG`. Every field has a default, so a
//! partial file is valid and a missing default file means defaults.
//!
//! ```json
//! {
//!   "theme": "dark",
//!   "window": { "width": 1024, "height": 768 }
//! }
//! ```

mod error;

pub use error::ConfigError;

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::ui::theme::ThemeMode;

/// Environment variable overriding the config file path.
pub const CONFIG_PATH_ENV: &str = "PROFILE_PAGE_CONFIG";

/// Config file name inside the config directory.
const CONFIG_FILE_NAME: &str = "config.json";

/// Smallest window edge accepted from configuration.
pub const MIN_WINDOW_EDGE: f32 = 320.0;

/// Initial window size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Width in logical pixels.
    pub width: f32,
    /// Height in logical pixels.
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 720.0,
        }
    }
}

impl WindowConfig {
    /// Size with each edge clamped to [`MIN_WINDOW_EDGE`].
    pub fn clamped(&self) -> (f32, f32) {
        (
            self.width.max(MIN_WINDOW_EDGE),
            self.height.max(MIN_WINDOW_EDGE),
        )
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Theme preference.
    pub theme: ThemeMode,
    /// Initial window.
    pub window: WindowConfig,
}

impl AppConfig {
    /// Loads from `PROFILE_PAGE_CONFIG` if set, else the default location.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load_from_path(Path::new(&path)),
            None => Self::load_default(),
        }
    }

    /// Loads from the default location, falling back to defaults when no
    /// file exists there.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_or_default(&default_path()?)
    }

    /// Loads from `path`, treating a missing file as defaults. Any other
    /// read or parse failure is returned.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load_from_path(path) {
            Err(ConfigError::NotFound { path }) => {
                tracing::debug!("No config file at {:?}, using defaults", path);
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Loads from a specific path. The file must exist.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let config = Self::parse(&content, path)?;
        tracing::debug!(path = %path.display(), theme = ?config.theme, "Loaded config");
        Ok(config)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })
    }
}

/// Default config file location.
pub fn default_path() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("dev", "anandbose", "profile-page")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoConfigDir)
}
