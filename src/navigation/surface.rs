//! Decision execution against the kiosk window.

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use tauri::{Manager, Window};

use crate::core::error::NavigationError;
use crate::protocol::content_url;
use crate::resolver::ContentResolver;

use super::interceptor::NavDecision;

/// Executes navigation decisions against the single kiosk window.
///
/// Document loads are a two-step protocol: `location.replace` starts the
/// load and the target fragment is parked here; the chrome script reports
/// DOMContentLoaded through the `page_ready` command, which applies the
/// parked fragment. There is no cancellation of an in-flight load — a
/// newer navigation overwrites the parked fragment, so a straggling
/// page-ready may observe the newer value. That window is accepted.
pub struct SurfaceNavigator {
    window: Window,
    resolver: Arc<ContentResolver>,
    pending_fragment: Mutex<Option<String>>,
}

impl SurfaceNavigator {
    pub fn new(window: Window, resolver: Arc<ContentResolver>) -> Self {
        Self {
            window,
            resolver,
            pending_fragment: Mutex::new(None),
        }
    }

    /// Carry out a navigation decision. `Allow` and `Cancel` are no-ops
    /// here; the host has already been told whether to proceed. Failures
    /// never propagate past this point — the surface keeps its last state.
    pub fn execute(&self, decision: NavDecision) {
        let result = match decision {
            NavDecision::Allow | NavDecision::Cancel => Ok(()),
            NavDecision::LoadLocal { path, fragment } => self.load_document(&path, fragment),
            NavDecision::OpenExternal(url) => self.open_external(&url),
        };
        if let Err(error) = result {
            tracing::error!(%error, "navigation decision failed");
        }
    }

    /// Load a local document into the surface, falling back to the default
    /// document when it is missing. When even the fallback is missing the
    /// surface keeps showing whatever it last loaded.
    fn load_document(
        &self,
        path: &Path,
        fragment: Option<String>,
    ) -> Result<(), NavigationError> {
        let document = if path.exists() {
            path
        } else {
            tracing::warn!(path = %path.display(), "document not found, falling back");
            let fallback = self.resolver.default_document();
            if !fallback.exists() {
                return Err(NavigationError::DocumentMissing {
                    path: fallback.to_path_buf(),
                });
            }
            fallback
        };

        *self.pending_fragment.lock() = fragment;

        let url = content_url(self.resolver.root(), document);
        tracing::info!(url = %url, "loading document");
        self.eval(&format!("window.location.replace(\"{}\");", escape_js(&url)))
    }

    /// Apply the parked fragment; invoked on the page-ready signal.
    /// Failure is logged, never fatal.
    pub fn page_ready(&self) {
        let fragment = self.pending_fragment.lock().take();
        if let Some(fragment) = fragment {
            let script = format!("window.location.hash = \"{}\";", escape_js(&fragment));
            if let Err(error) = self.eval(&script) {
                tracing::warn!(%error, fragment, "failed to apply fragment");
            }
        }
    }

    /// Delegate a URL to the platform's default handler. No in-app surface
    /// is ever created for external targets.
    fn open_external(&self, url: &str) -> Result<(), NavigationError> {
        tauri::api::shell::open(&self.window.shell_scope(), url, None).map_err(|error| {
            NavigationError::ExternalHandlerFailed {
                url: url.to_string(),
                reason: error.to_string(),
            }
        })
    }

    fn eval(&self, script: &str) -> Result<(), NavigationError> {
        self.window
            .eval(script)
            .map_err(|error| NavigationError::ScriptFailed {
                reason: error.to_string(),
            })
    }
}

/// Escape a string for embedding in a double-quoted script literal.
pub(crate) fn escape_js(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
