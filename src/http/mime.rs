//! MIME type detection module
//!
//! Maps a file extension to a Content-Type. Callers pick their own fallback:
//! archive files default to `application/octet-stream`, the front-end to
//! `text/plain`.

use std::path::Path;

/// Fallback for archive files with an unknown extension
pub const ARCHIVE_FALLBACK: &str = "application/octet-stream";
/// Fallback for front-end files with an unknown extension
pub const STATIC_FALLBACK: &str = "text/plain";

/// Get MIME Content-Type based on file extension (case-insensitive)
pub fn content_type_for_extension(extension: &str) -> Option<&'static str> {
    let ext = extension.to_ascii_lowercase();
    let mime = match ext.as_str() {
        // Text
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "txt" | "md" => "text/plain",
        "xml" => "application/xml",

        // JavaScript/WASM
        "js" | "mjs" => "text/javascript",
        "json" | "map" => "application/json",
        "wasm" => "application/wasm",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/vnd.microsoft.icon",
        "webp" => "image/webp",

        // Video
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",

        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/x-wav",
        "m4a" => "audio/mp4",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",

        // Documents
        "pdf" => "application/pdf",
        "zip" => "application/zip",

        _ => return None,
    };
    Some(mime)
}

/// Guess the Content-Type of `path`, falling back to `fallback`
pub fn guess(path: &Path, fallback: &'static str) -> &'static str {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(content_type_for_extension)
        .unwrap_or(fallback)
}
