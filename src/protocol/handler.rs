//! Content protocol handler implementation.

use std::path::Path;
use std::sync::Arc;

use tauri::http::{Request, Response, ResponseBuilder};
use url::Url;

use crate::core::error::ProtocolError;
use crate::core::utils::file_extension;
use crate::resolver::ContentResolver;

use super::CONTENT_SCHEME;

/// Serves documents from the content tree for `kiosk://` requests.
///
/// Missing documents are answered with the default document rather than an
/// error page, mirroring the navigation fallback; 404 is reserved for the
/// case where even the default document cannot be read.
pub struct ContentProtocolHandler {
    resolver: Arc<ContentResolver>,
}

impl ContentProtocolHandler {
    pub fn new(resolver: Arc<ContentResolver>) -> Self {
        Self { resolver }
    }

    /// Handle a protocol request.
    pub fn handle(
        &self,
        request: &Request,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request_path = match Url::parse(request.uri()) {
            Ok(url) => url.path().to_string(),
            Err(error) => {
                tracing::warn!(%error, uri = request.uri(), "unparseable protocol request");
                String::new()
            }
        };

        let (body, mime, status) = self.lookup(&request_path);
        ResponseBuilder::new()
            .status(status)
            .mimetype(mime)
            .header("X-Content-Type-Options", "nosniff")
            .body(body)
    }

    /// Resolve a request path and read the document, applying the fallback
    /// chain. Returns body, MIME type and status.
    pub(super) fn lookup(&self, request_path: &str) -> (Vec<u8>, &'static str, u16) {
        let path = self.resolver.resolve(request_path);

        match read_document(&path) {
            Ok(body) => (body, mime_for(&path), 200),
            Err(error) => {
                tracing::warn!(%error, "serving default document instead");
                let fallback = self.resolver.default_document();
                match read_document(fallback) {
                    Ok(body) => (body, mime_for(fallback), 200),
                    Err(error) => {
                        tracing::error!(%error, "default document unreadable");
                        (b"Not found".to_vec(), "text/plain", 404)
                    }
                }
            }
        }
    }
}

fn read_document(path: &std::path::Path) -> Result<Vec<u8>, ProtocolError> {
    std::fs::read(path).map_err(|error| ProtocolError::ReadFailed {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })
}

/// Register the content protocol with the Tauri builder.
pub fn register_content_protocol(
    builder: tauri::Builder<tauri::Wry>,
    resolver: Arc<ContentResolver>,
) -> tauri::Builder<tauri::Wry> {
    let handler = ContentProtocolHandler::new(resolver);

    builder.register_uri_scheme_protocol(CONTENT_SCHEME, move |_app, request| {
        handler.handle(request)
    })
}

/// MIME type for a content document, by extension.
pub(crate) fn mime_for(path: &Path) -> &'static str {
    match file_extension(path).as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "json" | "map" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "wasm" => "application/wasm",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        "ogg" => "audio/ogg",
        "pdf" => "application/pdf",
        "xml" => "application/xml",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
