//! Archive extraction via the platform archive tool.

use std::path::Path;

use super::downloader::{ProvisionError, Result};

/// Extract a zip archive into `dest`, replacing any existing contents.
///
/// Uses PowerShell's `Expand-Archive` on Windows and `unzip` elsewhere;
/// both ship with their platforms, so the shell carries no archive codec.
pub async fn extract_archive(archive: &Path, dest: &Path) -> Result<()> {
    tracing::info!(
        archive = %archive.display(),
        dest = %dest.display(),
        "extracting archive"
    );

    if dest.exists() {
        tokio::fs::remove_dir_all(dest).await?;
    }
    tokio::fs::create_dir_all(dest).await?;

    let status = if cfg!(windows) {
        tokio::process::Command::new("powershell")
            .args([
                "-NoProfile",
                "-Command",
                &format!(
                    "Expand-Archive -Path '{}' -DestinationPath '{}' -Force",
                    archive.display(),
                    dest.display()
                ),
            ])
            .status()
            .await
    } else {
        tokio::process::Command::new("unzip")
            .arg("-q")
            .arg("-o")
            .arg(archive)
            .arg("-d")
            .arg(dest)
            .status()
            .await
    };

    let status = status.map_err(|error| {
        ProvisionError::ExtractFailed(format!("failed to launch archive tool: {error}"))
    })?;

    if !status.success() {
        return Err(ProvisionError::ExtractFailed(format!(
            "archive tool exited with {status}"
        )));
    }

    tracing::info!("extraction complete");
    Ok(())
}
