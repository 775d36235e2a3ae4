//! Ray Optics kiosk shell
//!
//! Main entry point for the Tauri application.

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use std::sync::Arc;

use tauri::Manager;

use ray_optics_kiosk::commands::KioskState;
use ray_optics_kiosk::core::config::AppConfig;
use ray_optics_kiosk::logging::{LoggingConfig, LoggingSystem};
use ray_optics_kiosk::navigation::{NavigationInterceptor, OriginPolicy, SurfaceNavigator};
use ray_optics_kiosk::protocol::register_content_protocol;
use ray_optics_kiosk::provision::MARKER_FILENAME;
use ray_optics_kiosk::resolver::ContentResolver;
use ray_optics_kiosk::shell;

fn main() {
    let logging_config = if cfg!(debug_assertions) {
        LoggingConfig::development()
    } else {
        LoggingConfig::production()
    };

    // Keep the logging system alive for the duration of the application so
    // the non-blocking file writer is flushed on exit.
    let _logging_system = match LoggingSystem::init(logging_config) {
        Ok(system) => Some(system),
        Err(e) => {
            eprintln!("Failed to initialize logging system: {}. Using basic logging.", e);
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive(tracing::Level::INFO.into()),
                )
                .init();
            None
        }
    };

    tracing::info!("Starting Ray Optics kiosk...");

    let config_path = AppConfig::default_path();
    let config = match AppConfig::load_or_default(&config_path) {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!(%error, path = %config_path.display(), "config unreadable, using defaults");
            AppConfig::default()
        }
    };

    let content_root = config.content.content_root();
    if !content_root.exists() {
        tracing::warn!(
            root = %content_root.display(),
            "content root missing; run the provision binary to download the release"
        );
    }

    let resolver = Arc::new(ContentResolver::new(
        &content_root,
        &config.content.default_document,
    ));
    let interceptor = Arc::new(NavigationInterceptor::new(
        resolver.clone(),
        OriginPolicy::from_content(&config.content),
    ));

    let kiosk_state = KioskState::new(interceptor.clone(), content_root.join(MARKER_FILENAME));

    let builder = tauri::Builder::default().manage(kiosk_state);
    let builder = register_content_protocol(builder, resolver.clone());

    let window_config = config.clone();
    builder
        .setup(move |app| {
            let window = shell::create_main_window(
                &app.handle(),
                &window_config,
                interceptor.clone(),
            )?;
            let navigator = Arc::new(SurfaceNavigator::new(window, resolver.clone()));
            app.state::<KioskState>().attach_navigator(navigator);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            ray_optics_kiosk::commands::health_check,
            ray_optics_kiosk::commands::exit_kiosk,
            ray_optics_kiosk::commands::set_fullscreen,
            ray_optics_kiosk::commands::page_ready,
            ray_optics_kiosk::commands::open_target,
            ray_optics_kiosk::commands::content_version,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
