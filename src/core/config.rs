//! Configuration for the kiosk shell.
//!
//! Handles application configuration including:
//! - Content tree location and canonical origin mapping
//! - Window/kiosk preferences
//! - Release provisioning settings
//!
//! The configuration is stored as a JSON file under the platform config
//! directory and every field falls back to a default, so a missing or
//! partial file is never an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::error::ConfigError;
use crate::core::utils::exe_relative;
use crate::provision::ProvisionConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bundled content tree settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Window preferences
    #[serde(default)]
    pub window: WindowConfig,

    /// Release provisioning settings
    #[serde(default)]
    pub provision: ProvisionConfig,
}

/// Content tree configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Content root directory. `None` resolves to `www` next to the
    /// executable, matching where the provisioner unpacks releases.
    pub root: Option<PathBuf>,

    /// Default document, relative to the content root. Shown at startup
    /// and substituted whenever resolution fails.
    pub default_document: String,

    /// Public host the bundled content's canonical links point to.
    pub canonical_host: String,

    /// Published path prefix on the canonical host, stripped before local
    /// resolution.
    pub canonical_prefix: String,
}

impl ContentConfig {
    /// Effective content root directory
    pub fn content_root(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| exe_relative("www"))
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: None,
            default_document: "gallery/index.html".to_string(),
            canonical_host: "phydemo.app".to_string(),
            canonical_prefix: "/ray-optics".to_string(),
        }
    }
}

/// Window preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Start in fullscreen kiosk mode
    pub fullscreen: bool,

    /// Window width when not fullscreen
    pub width: f64,

    /// Window height when not fullscreen
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Ray Optics Gallery".to_string(),
            fullscreen: true,
            width: 1280.0,
            height: 800.0,
        }
    }
}

impl AppConfig {
    /// Default configuration file path under the platform config directory
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ray-optics-kiosk")
            .join("config.json")
    }

    /// Load configuration from the given path, falling back to defaults
    /// when the file is missing. A malformed file is reported as an error
    /// rather than silently replaced.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration atomically (temp file + rename)
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}
