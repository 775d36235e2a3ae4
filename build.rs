//! Build script for the Ray Optics kiosk shell.
//!
//! Runs the Tauri build step and keeps the placeholder dist page as a
//! rebuild trigger.

fn main() {
    tauri_build::build();

    println!("cargo:rerun-if-changed=dist/");
    println!("cargo:rerun-if-changed=build.rs");
}
