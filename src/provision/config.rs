//! Provisioning configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Upstream release pinned by default
pub const DEFAULT_RELEASE_VERSION: &str = "5.2.0";

const DEFAULT_URL_TEMPLATE: &str =
    "https://github.com/ricktu288/ray-optics/releases/download/v{version}/website-build.zip";

/// Configuration for provisioning the content tree from an upstream
/// release archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionConfig {
    /// Upstream release version to provision
    #[serde(default = "default_version")]
    pub version: String,

    /// Download URL template; `{version}` is substituted
    #[serde(default = "default_url_template")]
    pub url_template: String,

    /// Expected SHA-256 of the archive, verified when set. Upstream
    /// publishes no digest, so this is opt-in.
    #[serde(default)]
    pub sha256: Option<String>,

    /// Cache directory for downloaded archives. `None` uses the platform
    /// local-data directory.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_version() -> String {
    DEFAULT_RELEASE_VERSION.to_string()
}

fn default_url_template() -> String {
    DEFAULT_URL_TEMPLATE.to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            url_template: default_url_template(),
            sha256: None,
            cache_dir: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProvisionConfig {
    /// Set the release version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the archive cache directory
    pub fn with_cache_dir(mut self, dir: PathBuf) -> Self {
        self.cache_dir = Some(dir);
        self
    }

    /// Set the expected archive checksum
    pub fn with_sha256(mut self, sha256: impl Into<String>) -> Self {
        self.sha256 = Some(sha256.into());
        self
    }

    /// Download URL for the pinned version
    pub fn release_url(&self) -> String {
        self.url_template.replace("{version}", &self.version)
    }

    /// Cached archive file name for the pinned version
    pub fn archive_filename(&self) -> String {
        format!("website-build-v{}.zip", self.version)
    }

    /// Effective cache directory
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(|| {
            directories::BaseDirs::new()
                .map(|dirs| {
                    dirs.data_local_dir()
                        .join("ray-optics-kiosk")
                        .join("cache")
                })
                .unwrap_or_else(|| PathBuf::from(".cache"))
        })
    }

    /// HTTP request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
