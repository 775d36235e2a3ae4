//! Window icon lookup.

use std::path::{Path, PathBuf};

use crate::core::utils::exe_relative;

/// Probe candidate icon locations; the first existing file wins, and
/// having none falls back to the platform default.
pub fn find_window_icon(content_root: &Path) -> Option<PathBuf> {
    let candidates = [
        exe_relative("icon.png"),
        content_root.join("img").join("icon.png"),
    ];

    for candidate in candidates {
        if candidate.is_file() {
            tracing::info!(icon = %candidate.display(), "using window icon");
            return Some(candidate);
        }
    }

    tracing::debug!("no icon found, using default");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_finds_icon_in_content_tree() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("www");
        std::fs::create_dir_all(root.join("img")).unwrap();
        std::fs::write(root.join("img/icon.png"), [0u8; 8]).unwrap();

        assert_eq!(find_window_icon(&root), Some(root.join("img/icon.png")));
    }
}
