//! Kiosk window shell.
//!
//! Builds the single fullscreen window, injects the kiosk chrome (exit
//! control, shortcuts, page-ready beacon) and wires navigation events to
//! the interceptor.

pub mod icon;
pub mod inject;
pub mod window;

pub use icon::find_window_icon;
pub use inject::CHROME_SCRIPT;
pub use window::{create_main_window, MAIN_WINDOW_LABEL};
