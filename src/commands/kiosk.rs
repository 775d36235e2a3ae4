//! Kiosk-control Tauri commands.
//!
//! The IPC bridge behind the injected chrome script: exit, fullscreen,
//! the page-ready signal and `target="_blank"` routing.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::navigation::{NavDecision, NavigationInterceptor, SurfaceNavigator};
use crate::provision::read_marker;

/// Shared kiosk state managed by the Tauri runtime.
///
/// The navigator is attached after the window exists; until then incoming
/// decisions are dropped with a warning (nothing to display them on).
pub struct KioskState {
    interceptor: Arc<NavigationInterceptor>,
    navigator: RwLock<Option<Arc<SurfaceNavigator>>>,
    marker_path: PathBuf,
}

impl KioskState {
    pub fn new(interceptor: Arc<NavigationInterceptor>, marker_path: PathBuf) -> Self {
        Self {
            interceptor,
            navigator: RwLock::new(None),
            marker_path,
        }
    }

    pub fn interceptor(&self) -> &NavigationInterceptor {
        &self.interceptor
    }

    /// Attach the surface navigator once the window has been created
    pub fn attach_navigator(&self, navigator: Arc<SurfaceNavigator>) {
        *self.navigator.write() = Some(navigator);
    }

    pub fn navigator(&self) -> Option<Arc<SurfaceNavigator>> {
        self.navigator.read().clone()
    }

    /// Execute a navigation decision against the attached surface
    pub fn execute(&self, decision: NavDecision) {
        match self.navigator() {
            Some(navigator) => navigator.execute(decision),
            None => tracing::warn!(?decision, "no surface attached, decision dropped"),
        }
    }

    pub fn marker_path(&self) -> &Path {
        &self.marker_path
    }
}

/// Close the kiosk. Bound to the injected exit control.
#[tauri::command]
pub fn exit_kiosk(window: tauri::Window) {
    tracing::info!("exit control activated, closing kiosk");
    if let Err(error) = window.close() {
        tracing::error!(%error, "failed to close window");
    }
}

/// Set or toggle fullscreen. `enabled: None` toggles.
#[tauri::command]
pub fn set_fullscreen(window: tauri::Window, enabled: Option<bool>) -> Result<bool, String> {
    let target = match enabled {
        Some(value) => value,
        None => !window.is_fullscreen().map_err(|e| e.to_string())?,
    };
    window.set_fullscreen(target).map_err(|e| e.to_string())?;
    Ok(target)
}

/// Page-load completion signal from the chrome script. Applies any parked
/// fragment for the document that just finished loading.
#[tauri::command]
pub fn page_ready(state: tauri::State<KioskState>) {
    if let Some(navigator) = state.navigator() {
        navigator.page_ready();
    }
}

/// Route a `target="_blank"` activation. The kiosk never opens a second
/// surface: the decision is either an in-surface load or the system
/// browser.
#[tauri::command]
pub fn open_target(state: tauri::State<KioskState>, url: String) {
    let decision = state.interceptor().decide_new_window(&url);
    state.execute(decision);
}

/// Provisioned content version from the marker file, if any
#[tauri::command]
pub fn content_version(state: tauri::State<KioskState>) -> Option<String> {
    read_marker(state.marker_path())
}

/// Liveness probe for the frontend
#[tauri::command]
pub fn health_check() -> String {
    "Ray Optics kiosk is running".to_string()
}
