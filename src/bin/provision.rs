//! Content provisioning tool.
//!
//! Downloads the pinned Ray Optics release archive and unpacks it into the
//! kiosk content root, maintaining the `.version` marker so repeated runs
//! are no-ops. Run before first launch and after bumping the pinned
//! version.
//!
//! Usage:
//!   provision [--version <x.y.z>] [--content-dir <path>] [--cache-dir <path>] [--force] [--verbose]

use std::path::PathBuf;

use ray_optics_kiosk::core::config::AppConfig;
use ray_optics_kiosk::provision::{ReleaseProvisioner, MARKER_FILENAME};

/// Command line arguments
struct Args {
    /// Release version override
    version: Option<String>,
    /// Content directory override
    content_dir: Option<PathBuf>,
    /// Archive cache directory override
    cache_dir: Option<PathBuf>,
    /// Re-provision even when the marker matches
    force: bool,
    /// Enable verbose logging
    verbose: bool,
}

impl Args {
    fn parse() -> Result<Self, String> {
        let mut args = std::env::args().skip(1);
        let mut version = None;
        let mut content_dir = None;
        let mut cache_dir = None;
        let mut force = false;
        let mut verbose = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--version" | "-V" => {
                    version = args.next();
                }
                "--content-dir" | "-c" => {
                    content_dir = args.next().map(PathBuf::from);
                }
                "--cache-dir" => {
                    cache_dir = args.next().map(PathBuf::from);
                }
                "--force" | "-f" => {
                    force = true;
                }
                "--verbose" | "-v" => {
                    verbose = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("Unknown argument: {}", arg));
                }
            }
        }

        Ok(Self {
            version,
            content_dir,
            cache_dir,
            force,
            verbose,
        })
    }
}

fn print_help() {
    println!("Ray Optics content provisioner");
    println!();
    println!("USAGE:");
    println!("  provision [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -V, --version <x.y.z>     Release version to provision");
    println!("  -c, --content-dir <path>  Content directory (default: www next to the kiosk)");
    println!("      --cache-dir <path>    Archive cache directory");
    println!("  -f, --force               Re-provision even when already current");
    println!("  -v, --verbose             Verbose logging");
    println!("  -h, --help                Show this help");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            print_help();
            std::process::exit(1);
        }
    };

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .init();

    let app_config = AppConfig::load_or_default(&AppConfig::default_path())
        .unwrap_or_else(|error| {
            tracing::warn!(%error, "config unreadable, using defaults");
            AppConfig::default()
        });

    let mut provision_config = app_config.provision.clone();
    if let Some(version) = args.version {
        provision_config = provision_config.with_version(version);
    }
    if let Some(cache_dir) = args.cache_dir {
        provision_config = provision_config.with_cache_dir(cache_dir);
    }

    let content_dir = args
        .content_dir
        .unwrap_or_else(|| app_config.content.content_root());

    tracing::info!(
        version = %provision_config.version,
        content = %content_dir.display(),
        "provisioning Ray Optics release"
    );

    let provisioner = ReleaseProvisioner::new(provision_config, &content_dir)?;

    if args.force {
        let marker = content_dir.join(MARKER_FILENAME);
        if marker.exists() {
            tokio::fs::remove_file(&marker).await?;
            tracing::debug!("removed version marker for forced re-provision");
        }
    }

    provisioner.provision().await?;
    Ok(())
}
