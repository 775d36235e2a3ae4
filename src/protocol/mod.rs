//! Custom content protocol for the kiosk.
//!
//! Serves the provisioned content tree to the webview over the `kiosk://`
//! URI scheme, the Tauri-native replacement for loading files straight off
//! disk. Every request path goes through the content resolver, so the
//! traversal guard and fallback rules apply to in-content navigation too.

mod handler;


pub use handler::{register_content_protocol, ContentProtocolHandler};

use std::path::Path;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// URI scheme the content tree is served under
pub const CONTENT_SCHEME: &str = "kiosk";

/// Characters percent-encoded in content URL paths. Slashes stay literal;
/// this only has to keep the URL well-formed, the protocol handler decodes
/// and re-validates everything anyway.
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Base origin the webview sees for content pages. Wry maps custom schemes
/// to `https://<scheme>.localhost` on Windows.
pub fn content_base() -> String {
    if cfg!(windows) {
        format!("https://{CONTENT_SCHEME}.localhost")
    } else {
        format!("{CONTENT_SCHEME}://localhost")
    }
}

/// Build the content URL for a document inside the content root.
pub fn content_url(root: &Path, document: &Path) -> String {
    let relative = document.strip_prefix(root).unwrap_or(document);
    let slashed = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");
    let encoded = utf8_percent_encode(&slashed, PATH_ENCODE_SET);
    format!("{}/{}", content_base(), encoded)
}
