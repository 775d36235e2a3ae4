//! Tauri IPC commands for the kiosk shell.
//!
//! Commands are invoked by the injected chrome script:
//! - Kiosk control (exit_kiosk, set_fullscreen)
//! - Navigation protocol (page_ready, open_target)
//! - Status (content_version, health_check)

pub mod kiosk;

pub use kiosk::*;
