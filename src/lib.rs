//! Ray Optics kiosk shell
//!
//! This crate packages the Ray Optics simulator and gallery into a
//! fullscreen desktop kiosk. It provides:
//! - Path resolution from untrusted navigation targets to content files
//! - Navigation interception (canonical origin remapping, external
//!   delegation, single-surface policy)
//! - A custom URI scheme serving the provisioned content tree
//! - Injected kiosk chrome (exit control, shortcuts) with its IPC bridge
//! - A release provisioner that downloads and unpacks the content

pub mod commands;
pub mod core;
pub mod logging;
pub mod navigation;
pub mod protocol;
pub mod provision;
pub mod resolver;
pub mod shell;

// Re-export commonly used items
pub use self::core::config::AppConfig;
pub use self::core::error::{KioskError, Result};
pub use navigation::{NavDecision, NavigationInterceptor, OriginPolicy, SurfaceNavigator};
pub use provision::{ProvisionConfig, ReleaseProvisioner};
pub use resolver::ContentResolver;
