//! Configuration module for Distance Graph
//!
//! Settings are read once at startup from a TOML file in the
//! platform-appropriate config directory under `dev.distance-graph`:
//!
//! - **Linux**: `~/.config/dev.distance-graph/config.toml`
//! - **macOS**: `~/Library/Application Support/dev.distance-graph/config.toml`
//! - **Windows**: `%APPDATA%\dev.distance-graph\config.toml`
//!
//! A missing file means defaults. The serial line parameters (baud rate and
//! read timeout) are fixed by the device protocol and are not configurable.
//!
//! # Example
//!
//! ```toml
//! [serial]
//! port_name = "/dev/ttyUSB0"
//!
//! [ui]
//! tick_interval_ms = 5
//! dark_mode = false
//! ```

use crate::error::{DistanceGraphError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application identifier for config directories
pub const APP_ID: &str = "dev.distance-graph";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Port opened when the config does not name one
pub const DEFAULT_PORT_NAME: &str = "COM6";

/// Baud rate of the distance sensor link
pub const BAUD_RATE: u32 = 9600;

/// How long a single line read may block
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Default interval between acquisition ticks in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1;

/// Get the path to the config file
pub fn config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|p| p.join(APP_ID).join(CONFIG_FILE))
}

// ==================== App Config ====================

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Serial link configuration
    #[serde(default)]
    pub serial: SerialConfig,

    /// Window and chart configuration
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load the config from the default location
    pub fn load() -> Result<Self> {
        let path = config_path().ok_or_else(|| {
            DistanceGraphError::Config("Could not determine config directory".to_string())
        })?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load the config from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DistanceGraphError::Config(format!("Failed to read config {:?}: {}", path, e))
        })?;

        Self::from_toml(&content)
            .map_err(|e| e.with_context(format!("Failed to parse config {:?}", path)))
    }

    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DistanceGraphError::Config(e.to_string()))
    }

    /// Load the config, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Interval between acquisition ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.ui.tick_interval_ms)
    }
}

// ==================== Serial Config ====================

/// Which device to read from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerialConfig {
    /// Device name as reported by port discovery (e.g. "COM6", "/dev/ttyUSB0")
    #[serde(default = "default_port_name")]
    pub port_name: String,
}

fn default_port_name() -> String {
    DEFAULT_PORT_NAME.to_string()
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port_name: default_port_name(),
        }
    }
}

// ==================== UI Config ====================

/// Window and chart configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Interval between acquisition ticks in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Initial window width in points
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Initial window height in points
    #[serde(default = "default_window_height")]
    pub window_height: f32,

    /// Plot line width in pixels
    #[serde(default = "default_line_width")]
    pub line_width: f32,

    /// Enable dark mode
    #[serde(default = "default_true")]
    pub dark_mode: bool,
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

fn default_window_width() -> f32 {
    800.0
}

fn default_window_height() -> f32 {
    600.0
}

fn default_line_width() -> f32 {
    1.5
}

fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            line_width: default_line_width(),
            dark_mode: true,
        }
    }
}

// ==================== Tests ====================
