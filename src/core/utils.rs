//! Utility functions for the kiosk shell.
//!
//! Common path helpers used by the resolver and the shell.

use std::path::{Component, Path, PathBuf};

/// Extract file extension from path (lowercase)
pub fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default()
}

/// Fold `.` and `..` segments without touching the filesystem.
///
/// `fs::canonicalize` requires the path to exist; resolution targets may
/// not (the `.html` probe runs afterwards), so traversal checks work on
/// this lexical form instead. `..` at the root is dropped rather than
/// carried over.
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}

/// Resolve a directory name relative to the running executable.
///
/// Falls back to the working directory when the executable path cannot be
/// determined (some containerized environments).
pub fn exe_relative(name: &str) -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(name)))
        .unwrap_or_else(|| PathBuf::from(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Path::new("index.HTML")), "html");
        assert_eq!(file_extension(Path::new("photo.png")), "png");
        assert_eq!(file_extension(Path::new("no_extension")), "");
    }

    #[test]
    fn test_lexical_normalize_folds_dots() {
        assert_eq!(
            lexical_normalize(Path::new("/www/gallery/./lens/../index.html")),
            PathBuf::from("/www/gallery/index.html")
        );
    }

    #[test]
    fn test_lexical_normalize_clamps_at_root() {
        assert_eq!(
            lexical_normalize(Path::new("/../../etc/passwd")),
            PathBuf::from("/etc/passwd")
        );
    }

    #[test]
    fn test_lexical_normalize_relative() {
        assert_eq!(
            lexical_normalize(Path::new("gallery/../simulator")),
            PathBuf::from("simulator")
        );
    }
}
