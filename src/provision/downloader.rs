//! Release download and provisioning orchestration.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use super::config::ProvisionConfig;
use super::extract::extract_archive;

/// Error types for provisioning operations
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Extraction failed: {0}")]
    ExtractFailed(String),
}

/// Result type for provisioning operations
pub type Result<T> = std::result::Result<T, ProvisionError>;

/// Name of the version marker file inside the content root
pub const MARKER_FILENAME: &str = ".version";

/// Downloads the pinned release archive and unpacks it into the content
/// directory, tracking what is installed through a single-line version
/// marker file. Repeated runs against an up-to-date tree are no-ops.
pub struct ReleaseProvisioner {
    config: ProvisionConfig,
    content_dir: PathBuf,
    client: reqwest::Client,
}

impl ReleaseProvisioner {
    pub fn new(config: ProvisionConfig, content_dir: impl Into<PathBuf>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(format!("ray-optics-kiosk/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            config,
            content_dir: content_dir.into(),
            client,
        })
    }

    /// Path of the version marker file
    pub fn marker_path(&self) -> PathBuf {
        self.content_dir.join(MARKER_FILENAME)
    }

    /// Whether the content tree needs (re-)provisioning
    pub fn needs_update(&self) -> bool {
        read_marker(&self.marker_path()).as_deref() != Some(self.config.version.as_str())
    }

    /// Provision the content tree: download (or reuse a cached archive),
    /// verify, extract, write the marker.
    pub async fn provision(&self) -> Result<()> {
        if !self.needs_update() {
            tracing::info!(
                version = %self.config.version,
                "content already provisioned"
            );
            return Ok(());
        }

        let cache_dir = self.config.cache_dir();
        tokio::fs::create_dir_all(&cache_dir).await?;

        let archive = cache_dir.join(self.config.archive_filename());
        if archive.exists() {
            tracing::info!(archive = %archive.display(), "using cached archive");
        } else {
            self.download(&archive).await?;
        }

        if let Some(expected) = &self.config.sha256 {
            let actual = self.calculate_checksum(&archive).await?;
            if &actual != expected {
                tokio::fs::remove_file(&archive).await.ok();
                return Err(ProvisionError::ChecksumMismatch {
                    expected: expected.clone(),
                    actual,
                });
            }
        }

        extract_archive(&archive, &self.content_dir).await?;
        write_marker(&self.marker_path(), &self.config.version).await?;

        tracing::info!(
            version = %self.config.version,
            content = %self.content_dir.display(),
            "content provisioned"
        );
        Ok(())
    }

    /// Download the release archive, resuming a partial download when one
    /// is present.
    async fn download(&self, target: &Path) -> Result<()> {
        let url = self.config.release_url();
        let partial = partial_path(target);

        let mut downloaded: u64 = 0;
        if partial.exists() {
            downloaded = tokio::fs::metadata(&partial).await?.len();
            tracing::info!(offset = downloaded, "resuming download");
        }

        tracing::info!(%url, "downloading release archive");

        let mut request = self.client.get(&url);
        if downloaded > 0 {
            request = request.header("Range", format!("bytes={downloaded}-"));
        }

        let response = request.send().await?;
        if !response.status().is_success()
            && response.status() != reqwest::StatusCode::PARTIAL_CONTENT
        {
            return Err(ProvisionError::DownloadFailed(format!(
                "server returned status: {}",
                response.status()
            )));
        }

        // A server that ignores the Range header restarts from zero.
        if downloaded > 0 && response.status() != reqwest::StatusCode::PARTIAL_CONTENT {
            tracing::warn!("server ignored range request, restarting download");
            downloaded = 0;
            tokio::fs::remove_file(&partial).await.ok();
        }

        let total = response
            .content_length()
            .map(|len| len + downloaded)
            .unwrap_or(0);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&partial)
            .await?;

        let mut stream = response.bytes_stream();
        let mut last_logged = downloaded;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;

            if downloaded - last_logged >= 8 * 1024 * 1024 {
                last_logged = downloaded;
                tracing::info!(
                    downloaded_mb = downloaded / (1024 * 1024),
                    total_mb = total / (1024 * 1024),
                    "download progress"
                );
            }
        }
        file.flush().await?;

        tokio::fs::rename(&partial, target).await?;
        tracing::info!(archive = %target.display(), "download complete");
        Ok(())
    }

    /// Calculate SHA-256 checksum of a file
    pub async fn calculate_checksum(&self, path: &Path) -> Result<String> {
        let mut file = File::open(path).await?;
        let mut hasher = Sha256::new();
        let mut buffer = vec![0u8; 1024 * 1024];

        loop {
            let n = file.read(&mut buffer).await?;
            if n == 0 {
                break;
            }
            hasher.update(&buffer[..n]);
        }

        Ok(format!("{:x}", hasher.finalize()))
    }
}

/// In-progress download path for a target archive
pub(super) fn partial_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    target.with_file_name(name)
}

/// Read the version marker, if present
pub fn read_marker(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|contents| contents.trim().to_string())
        .filter(|version| !version.is_empty())
}

/// Write the version marker
pub async fn write_marker(path: &Path, version: &str) -> Result<()> {
    tokio::fs::write(path, version).await?;
    Ok(())
}
