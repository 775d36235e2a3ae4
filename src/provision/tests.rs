//! Tests for the provisioning module.

use std::path::Path;

use tempfile::TempDir;

use super::config::ProvisionConfig;
use super::downloader::{partial_path, read_marker, write_marker, ReleaseProvisioner};

fn create_test_provisioner(version: &str) -> (ReleaseProvisioner, TempDir) {
    let temp = TempDir::new().unwrap();
    let config = ProvisionConfig::default()
        .with_version(version)
        .with_cache_dir(temp.path().join("cache"));
    let content_dir = temp.path().join("www");
    std::fs::create_dir_all(&content_dir).unwrap();
    let provisioner = ReleaseProvisioner::new(config, content_dir).unwrap();
    (provisioner, temp)
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_release_url_substitutes_version() {
    let config = ProvisionConfig::default().with_version("5.2.0");
    assert_eq!(
        config.release_url(),
        "https://github.com/ricktu288/ray-optics/releases/download/v5.2.0/website-build.zip"
    );
}

#[test]
fn test_archive_filename_carries_version() {
    let config = ProvisionConfig::default().with_version("6.0.1");
    assert_eq!(config.archive_filename(), "website-build-v6.0.1.zip");
}

#[test]
fn test_cache_dir_override() {
    let config = ProvisionConfig::default().with_cache_dir("/tmp/kiosk-cache".into());
    assert_eq!(config.cache_dir(), Path::new("/tmp/kiosk-cache"));
}

// ============================================================================
// Version marker
// ============================================================================

#[tokio::test]
async fn test_marker_roundtrip() {
    let temp = TempDir::new().unwrap();
    let marker = temp.path().join(".version");

    assert_eq!(read_marker(&marker), None);

    write_marker(&marker, "5.2.0").await.unwrap();
    assert_eq!(read_marker(&marker), Some("5.2.0".to_string()));
}

#[test]
fn test_marker_trims_whitespace() {
    let temp = TempDir::new().unwrap();
    let marker = temp.path().join(".version");
    std::fs::write(&marker, "5.2.0\n").unwrap();
    assert_eq!(read_marker(&marker), Some("5.2.0".to_string()));
}

#[test]
fn test_empty_marker_reads_as_absent() {
    let temp = TempDir::new().unwrap();
    let marker = temp.path().join(".version");
    std::fs::write(&marker, "  \n").unwrap();
    assert_eq!(read_marker(&marker), None);
}

#[tokio::test]
async fn test_needs_update_without_marker() {
    let (provisioner, _temp) = create_test_provisioner("5.2.0");
    assert!(provisioner.needs_update());
}

#[tokio::test]
async fn test_needs_update_with_matching_marker() {
    let (provisioner, _temp) = create_test_provisioner("5.2.0");
    write_marker(&provisioner.marker_path(), "5.2.0").await.unwrap();
    assert!(!provisioner.needs_update());
}

#[tokio::test]
async fn test_needs_update_with_stale_marker() {
    let (provisioner, _temp) = create_test_provisioner("5.2.0");
    write_marker(&provisioner.marker_path(), "5.1.0").await.unwrap();
    assert!(provisioner.needs_update());
}

#[tokio::test]
async fn test_provision_is_noop_when_current() {
    let (provisioner, _temp) = create_test_provisioner("5.2.0");
    write_marker(&provisioner.marker_path(), "5.2.0").await.unwrap();
    // No network, no cache: would fail if it tried to do anything.
    provisioner.provision().await.unwrap();
}

// ============================================================================
// Download bookkeeping
// ============================================================================

#[test]
fn test_partial_path_appends_part() {
    assert_eq!(
        partial_path(Path::new("/cache/website-build-v5.2.0.zip")),
        Path::new("/cache/website-build-v5.2.0.zip.part")
    );
}

#[tokio::test]
async fn test_checksum_empty_file() {
    let (provisioner, temp) = create_test_provisioner("5.2.0");
    let file = temp.path().join("empty.bin");
    tokio::fs::write(&file, b"").await.unwrap();

    let checksum = provisioner.calculate_checksum(&file).await.unwrap();
    // SHA-256 of the empty input
    assert_eq!(
        checksum,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[tokio::test]
async fn test_checksum_known_content() {
    let (provisioner, temp) = create_test_provisioner("5.2.0");
    let file = temp.path().join("data.bin");
    tokio::fs::write(&file, b"ray optics").await.unwrap();

    let checksum = provisioner.calculate_checksum(&file).await.unwrap();
    assert_eq!(checksum.len(), 64);
    assert!(checksum.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn test_checksum_large_file_buffering() {
    let (provisioner, temp) = create_test_provisioner("5.2.0");
    let file = temp.path().join("large.bin");
    tokio::fs::write(&file, vec![0xABu8; 2 * 1024 * 1024]).await.unwrap();

    let checksum = provisioner.calculate_checksum(&file).await.unwrap();
    assert_eq!(checksum.len(), 64);
}
