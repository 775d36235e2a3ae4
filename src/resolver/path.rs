//! Content path resolution.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

use crate::core::utils::{file_extension, lexical_normalize};

/// Resolves navigation request paths to documents inside the content root.
///
/// Resolution is infallible: requests that decode badly, escape the root,
/// or name nothing on disk all come back as the default document. The
/// returned path is always lexically inside the root.
pub struct ContentResolver {
    root: PathBuf,
    default_document: PathBuf,
}

impl ContentResolver {
    /// Create a resolver for the given content root. `default_document` is
    /// relative to the root (e.g. `gallery/index.html`).
    pub fn new(root: impl Into<PathBuf>, default_document: &str) -> Self {
        let root = lexical_normalize(&root.into());
        let default_document = root.join(default_document);
        Self {
            root,
            default_document,
        }
    }

    /// The content root all resolutions are confined to
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The fixed fallback document
    pub fn default_document(&self) -> &Path {
        &self.default_document
    }

    /// Resolve a request path to a document inside the content root.
    pub fn resolve(&self, request: &str) -> PathBuf {
        tracing::debug!(request, "resolving navigation target");

        let decoded = decode_request(request);
        let slashed = decoded.replace('\\', "/");
        // File-URL drive form (`/C:/...`): drop the leading slash so the
        // drive prefix parses. Harmless on other platforms, where the
        // relative branch strips the prefix anyway.
        let request_path = strip_drive_slash(&slashed);

        // An absolute path already inside the content root is used as-is.
        let candidate = Path::new(request_path);
        if candidate.is_absolute() {
            let normalized = lexical_normalize(candidate);
            if self.contains(&normalized) {
                return self.probe(normalized);
            }
        }

        // Otherwise treat the remainder as relative to the content root.
        let relative = strip_request_prefixes(request_path);
        if relative.is_empty() {
            return self.default_document.clone();
        }

        let normalized = lexical_normalize(&self.root.join(relative));
        if !self.contains(&normalized) {
            tracing::warn!(request, "path escapes the content root, using default document");
            return self.default_document.clone();
        }

        self.probe(normalized)
    }

    /// Containment check against the root. Component-wise, so `www-old`
    /// never passes for a root named `www`; case-insensitive on Windows.
    fn contains(&self, path: &Path) -> bool {
        #[cfg(windows)]
        {
            let path = PathBuf::from(path.to_string_lossy().to_lowercase());
            let root = PathBuf::from(self.root.to_string_lossy().to_lowercase());
            path.starts_with(&root)
        }
        #[cfg(not(windows))]
        {
            path.starts_with(&self.root)
        }
    }

    /// Final on-disk probes: directories gain `index.html`, extensionless
    /// paths that do not exist try an `.html` sibling.
    fn probe(&self, mut path: PathBuf) -> PathBuf {
        if path.is_dir() {
            path.push("index.html");
        }

        if file_extension(&path).is_empty() && !path.exists() {
            let with_html = path.with_extension("html");
            if with_html.exists() {
                tracing::debug!(path = %with_html.display(), "using .html sibling");
                path = with_html;
            }
        }

        path
    }
}

/// Percent-decode a request path, keeping the raw string when the encoding
/// is malformed or not UTF-8.
fn decode_request(request: &str) -> String {
    match percent_decode_str(request).decode_utf8() {
        Ok(decoded) => match decoded {
            Cow::Borrowed(s) => s.to_string(),
            Cow::Owned(s) => s,
        },
        Err(_) => request.to_string(),
    }
}

/// Drop the leading slash of a `/C:/...` file-URL path
fn strip_drive_slash(path: &str) -> &str {
    let bytes = path.as_bytes();
    if bytes.len() >= 3
        && bytes[0] == b'/'
        && bytes[1].is_ascii_alphabetic()
        && bytes[2] == b':'
    {
        &path[1..]
    } else {
        path
    }
}

/// Strip leading separators and a drive-letter prefix from a request path,
/// leaving a root-relative remainder.
fn strip_request_prefixes(path: &str) -> &str {
    let mut rest = path.trim_start_matches('/');
    let bytes = rest.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        rest = &rest[2..];
    }
    rest.trim_start_matches('/')
}
