//! Navigation target classification.

use url::Url;

use crate::core::config::ContentConfig;
use crate::protocol::CONTENT_SCHEME;

/// Where a navigation target points, classified from its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// The application's canonical public origin. `path` has the published
    /// prefix stripped and is ready for local resolution.
    Canonical {
        path: String,
        fragment: Option<String>,
    },

    /// An unrelated web URL, destined for the system browser.
    WebExternal(String),

    /// A `file://` target naming a local document.
    LocalFile {
        path: String,
        fragment: Option<String>,
    },

    /// A page already served through the kiosk content scheme.
    InContent {
        path: String,
        fragment: Option<String>,
    },

    /// Unknown scheme or a string that does not parse as a URL.
    Other,
}

/// Canonical-origin matching rules for the bundled content.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    canonical_host: String,
    canonical_prefix: String,
}

impl OriginPolicy {
    pub fn new(canonical_host: impl Into<String>, canonical_prefix: impl Into<String>) -> Self {
        Self {
            canonical_host: canonical_host.into().to_ascii_lowercase(),
            canonical_prefix: canonical_prefix.into(),
        }
    }

    pub fn from_content(config: &ContentConfig) -> Self {
        Self::new(&config.canonical_host, &config.canonical_prefix)
    }

    /// Exact host or subdomain. A substring match would also accept hosts
    /// like `phydemo.app.evil.example`.
    fn is_canonical_host(&self, host: &str) -> bool {
        let host = host.to_ascii_lowercase();
        host == self.canonical_host || host.ends_with(&format!(".{}", self.canonical_host))
    }

    /// Strip the published path prefix, yielding an in-content path with a
    /// leading slash. The prefix only matches on a segment boundary.
    fn strip_prefix(&self, path: &str) -> String {
        let rest = match path.strip_prefix(self.canonical_prefix.as_str()) {
            Some("") => "/",
            Some(rest) if rest.starts_with('/') => rest,
            _ => path,
        };
        if rest.starts_with('/') {
            rest.to_string()
        } else {
            format!("/{rest}")
        }
    }
}

/// Classify a raw navigation target.
///
/// This is the single dispatch point for all navigation handling; every
/// scheme falls into exactly one variant and malformed input is `Other`.
pub fn classify(raw: &str, policy: &OriginPolicy) -> NavTarget {
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(_) => return NavTarget::Other,
    };

    match url.scheme() {
        "http" | "https" => {
            let host = url.host_str().unwrap_or_default();
            if is_content_host(host) {
                NavTarget::InContent {
                    path: url.path().to_string(),
                    fragment: fragment_of(&url),
                }
            } else if policy.is_canonical_host(host) {
                NavTarget::Canonical {
                    path: policy.strip_prefix(url.path()),
                    fragment: fragment_of(&url),
                }
            } else {
                NavTarget::WebExternal(url.to_string())
            }
        }
        "file" => NavTarget::LocalFile {
            path: url.path().to_string(),
            fragment: fragment_of(&url),
        },
        scheme if scheme == CONTENT_SCHEME || scheme == "tauri" => NavTarget::InContent {
            path: url.path().to_string(),
            fragment: fragment_of(&url),
        },
        _ => NavTarget::Other,
    }
}

/// Hosts the webview uses for locally served pages. Wry exposes custom
/// schemes as `https://<scheme>.localhost` on Windows; `tauri.localhost`
/// hosts the bundled placeholder page.
fn is_content_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    host == format!("{CONTENT_SCHEME}.localhost") || host == "tauri.localhost"
}

fn fragment_of(url: &Url) -> Option<String> {
    url.fragment()
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
}
