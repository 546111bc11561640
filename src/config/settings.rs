//! User-facing application settings
//!
//! Settings are read once at startup from a TOML file. Every field has
//! a default, so a partial file or no file at all is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable that overrides the settings file path
pub const CONFIG_PATH_ENV: &str = "MENU_BOARD_CONFIG";

/// Default settings file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "menu-board.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid settings: {reason}")]
    Invalid { reason: String },
}

/// Presentation settings for the application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Restaurant title shown in the header
    pub title: String,
    /// Currency symbol prefixed to every price
    pub currency: String,
    /// Event-poll timeout in milliseconds (drives the list highlight)
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Christoffel's Menu".to_string(),
            currency: "R".to_string(),
            tick_rate_ms: 100,
        }
    }
}

impl Settings {
    /// Loads settings from a specific TOML file
    ///
    /// # Arguments
    /// * `path` - Settings file to read
    ///
    /// # Returns
    /// Parsed settings, or a `SettingsError` naming the file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            toml::from_str(&text).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from the configured location, if any
    ///
    /// The path comes from `MENU_BOARD_CONFIG` when set, otherwise
    /// `menu-board.toml` in the working directory. A missing default
    /// file yields `Settings::default()`; an explicitly configured
    /// file must exist.
    pub fn load() -> Result<Self, SettingsError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Returns the event-poll timeout as a duration
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_rate_ms == 0 {
            return Err(SettingsError::Invalid {
                reason: "tick_rate_ms must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
