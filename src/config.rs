//! Game configuration, read from a RON file next to the binary.

use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "pocket_battle.ron";
pub const DEFAULT_SAVE_PATH: &str = "poketk_save.json";

/// How long the terminal presenter waits between engine steps, in milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Pacing {
    /// After the player's attack lands
    pub turn_delay_ms: u64,
    /// Before the opponent attacks
    pub enemy_delay_ms: u64,
    /// After a faint, before returning to the menu
    pub end_delay_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            turn_delay_ms: 1500,
            enemy_delay_ms: 1000,
            end_delay_ms: 2000,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub save_path: String,
    /// Fixed seed for reproducible runs. None draws from OS entropy.
    pub seed: Option<u64>,
    /// A `tracing` level filter such as "warn" or "debug".
    pub log_level: String,
    pub pacing: Pacing,
    /// Replaces the built-in opponent names when set.
    pub roster: Option<Vec<String>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: DEFAULT_SAVE_PATH.to_string(),
            seed: None,
            log_level: "warn".to_string(),
            pacing: Pacing::default(),
            roster: None,
        }
    }
}

impl GameConfig {
    /// Parse a config from RON text. Omitted fields take their defaults.
    pub fn from_ron(content: &str, path: &Path) -> ConfigResult<Self> {
        ron::from_str(content).map_err(|e| ConfigError::Malformed {
            path: path.to_path_buf(),
            details: e.to_string(),
        })
    }

    /// Load the config at `path`. A missing file is not an error and gives the defaults.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => {
                debug!("Loading config from {}", path.display());
                Self::from_ron(&content, path)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                details: e.to_string(),
            }),
        }
    }

    /// Like `load`, but any error falls back to the defaults and is handed back alongside.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<ConfigError>) {
        match Self::load(path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}
