//! Main kiosk window construction.

use std::sync::Arc;

use tauri::{AppHandle, Manager, Window, WindowBuilder, WindowUrl};

use crate::commands::KioskState;
use crate::core::config::AppConfig;
use crate::core::error::Result;
use crate::navigation::{NavDecision, NavigationInterceptor};
use crate::protocol::content_url;

use super::icon::find_window_icon;
use super::inject::CHROME_SCRIPT;

/// Label of the single kiosk window
pub const MAIN_WINDOW_LABEL: &str = "main";

/// Build the kiosk window: fullscreen, menu-less, starting at the default
/// document, with every navigation routed through the interceptor.
///
/// When the content tree has not been provisioned yet the window shows the
/// bundled placeholder page instead.
pub fn create_main_window(
    app: &AppHandle,
    config: &AppConfig,
    interceptor: Arc<NavigationInterceptor>,
) -> Result<Window> {
    let resolver = interceptor.resolver();
    let start_document = resolver.default_document().to_path_buf();
    let content_root = resolver.root().to_path_buf();

    let url = if start_document.exists() {
        let raw = content_url(&content_root, &start_document);
        match raw.parse::<url::Url>() {
            Ok(parsed) => WindowUrl::External(parsed),
            Err(error) => {
                tracing::error!(%error, url = %raw, "invalid content URL, showing placeholder");
                WindowUrl::App("index.html".into())
            }
        }
    } else {
        tracing::warn!(
            document = %start_document.display(),
            "default document missing, showing placeholder; run the provision binary"
        );
        WindowUrl::App("index.html".into())
    };

    let nav_interceptor = interceptor.clone();
    let handle = app.clone();

    let window = WindowBuilder::new(app, MAIN_WINDOW_LABEL, url)
        .title(&config.window.title)
        .inner_size(config.window.width, config.window.height)
        .fullscreen(config.window.fullscreen)
        .initialization_script(CHROME_SCRIPT)
        .on_navigation(move |url| {
            let decision = nav_interceptor.decide_navigate(url.as_str());
            if decision == NavDecision::Allow {
                return true;
            }

            // Execute off the event callback; the webview is told "deny"
            // synchronously and the replacement load happens right after.
            let handle = handle.clone();
            tauri::async_runtime::spawn(async move {
                handle.state::<KioskState>().execute(decision);
            });
            false
        })
        .build()?;

    if let Some(icon_path) = find_window_icon(&content_root) {
        if let Err(error) = window.set_icon(tauri::Icon::File(icon_path)) {
            tracing::warn!(%error, "failed to set window icon");
        }
    }

    Ok(window)
}
