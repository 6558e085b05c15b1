//! Configuration data types
//!
//! Every section has `#[serde(default)]`, so a config file only needs the
//! values it wants to change.

use crate::color::{Color, BLACK, CYAN, DEFAULT_BRIGHTNESS, WHITE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The root config file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub emulator: EmulatorConfig,
    pub controller: ControllerConfig,
    pub menu: MenuConfig,
}

/// Where frames are sent and how big the display is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub host: String,
    pub port: u16,
    /// Width in bottles
    pub width: u32,
    /// Height in bottles
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            host: "127.0.0.1".to_string(),
            port: 1337,
            width: 40,
            height: 16,
        }
    }
}

/// The display emulator window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmulatorConfig {
    /// Address to listen on for frames
    pub host: String,
    pub port: u16,
    pub width: u32,
    pub height: u32,
    /// Size of one bottle in window pixels
    pub dot_size: u32,
    pub fps: u32,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            host: "127.0.0.1".to_string(),
            port: 1337,
            width: 40,
            height: 16,
            dot_size: 10,
            fps: 60,
        }
    }
}

/// The controller bridge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// JSON-RPC endpoint of the game
    pub host: String,
    pub port: u16,
    pub fps: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        ControllerConfig {
            host: "127.0.0.1".to_string(),
            port: 1338,
            fps: 60,
        }
    }
}

/// The menu demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub width: u32,
    pub height: u32,
    pub color: Color,
    pub active: Color,
    pub background: Color,
    pub brightness: f32,
    pub fps: u32,
    /// Glyph atlas image, the built-in font is used when unset
    pub font: Option<PathBuf>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            width: 40,
            height: 16,
            color: WHITE,
            active: CYAN,
            background: BLACK,
            brightness: DEFAULT_BRIGHTNESS,
            fps: 10,
            font: None,
        }
    }
}

/// Errors that can occur while loading or saving the config
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::SerializationError(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::SerializationError(err)
    }
}
