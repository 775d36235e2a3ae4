//! Error types for the kiosk shell.
//!
//! Every recoverable failure in the shell degrades to a fixed fallback
//! (default document, raw string, no-op); these types exist for diagnostics
//! and for the few boundaries where a caller can still react.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for kiosk operations
pub type Result<T> = std::result::Result<T, KioskError>;

/// Main error type for the kiosk shell
#[derive(Error, Debug)]
pub enum KioskError {
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Content protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Window error: {0}")]
    Window(#[from] tauri::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Navigation and surface errors
#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Script evaluation failed: {reason}")]
    ScriptFailed { reason: String },

    #[error("External handler failed for {url}: {reason}")]
    ExternalHandlerFailed { url: String, reason: String },

    #[error("Document not found: {}", .path.display())]
    DocumentMissing { path: PathBuf },
}

/// Content protocol errors
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Document read failed: {}, reason: {reason}", .path.display())]
    ReadFailed { path: PathBuf, reason: String },

    #[error("Response construction failed: {reason}")]
    ResponseFailed { reason: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config value: {field} = {value}")]
    InvalidValue { field: String, value: String },
}
