//! Finding, loading and saving the config file
//!
//! Lookup order:
//! 1. the file named by `$MLGAME_CONFIG`
//! 2. `<config dir>/mlgame/config.json` (e.g. `~/.config/mlgame/config.json`)
//! 3. built-in defaults

use super::types::*;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "MLGAME_CONFIG";

impl Config {
    /// Loads a config file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&json)?;
        Ok(config)
    }

    /// Writes the config as pretty JSON, creating parent directories
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Loads the config from the usual places, falling back to defaults
    ///
    /// A config file that exists but cannot be read is an error. A missing one
    /// is not.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(explicit, default_path())
    }

    fn load_from(explicit: Option<PathBuf>, fallback: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            info!("Loading config from {}", path.display());
            return Self::load_from_file(path);
        }

        match fallback {
            Some(path) if path.exists() => {
                info!("Loading config from {}", path.display());
                Self::load_from_file(path)
            }
            Some(_) => Ok(Config::default()),
            None => {
                warn!("No config directory on this system, using defaults");
                Ok(Config::default())
            }
        }
    }
}

/// `<config dir>/mlgame/config.json`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mlgame").join("config.json"))
}
