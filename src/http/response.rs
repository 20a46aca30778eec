//! HTTP response building module
//!
//! Builders for the status codes the server emits, independent of which
//! handler produced them.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::cache::CachePolicy;
use super::range::ByteRange;

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response (CORS preflight)
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, HEAD, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type, Range")
        .header("Access-Control-Max-Age", "86400")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 416 Range Not Satisfiable response
pub fn build_416_response(file_size: usize) -> Response<Full<Bytes>> {
    Response::builder()
        .status(416)
        .header("Content-Type", "text/plain")
        .header("Content-Range", format!("bytes */{file_size}"))
        .body(Full::new(Bytes::from("Range Not Satisfiable")))
        .unwrap_or_else(|e| {
            log_build_error("416", &e);
            Response::new(Full::new(Bytes::from("Range Not Satisfiable")))
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("500 Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("500 Internal Server Error")))
        })
}

/// Build 200 response carrying a whole file
///
/// Archive files also advertise `Accept-Ranges`; static files carry only
/// their type and length.
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    cache: CachePolicy,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length);

    if let Some(value) = cache.to_header_value() {
        builder = builder
            .header("Accept-Ranges", "bytes")
            .header("Cache-Control", value);
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 206 Partial Content response for `range` of `data`
pub fn build_partial_response(
    data: &Bytes,
    range: ByteRange,
    content_type: &str,
    cache: CachePolicy,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let body = if is_head {
        Bytes::new()
    } else {
        data.slice(range.start..=range.end)
    };

    let mut builder = Response::builder()
        .status(206)
        .header("Content-Type", content_type)
        .header("Content-Length", range.len())
        .header("Content-Range", range.content_range(data.len()))
        .header("Accept-Ranges", "bytes");

    if let Some(value) = cache.to_header_value() {
        builder = builder.header("Cache-Control", value);
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error("206", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::cache::{ARCHIVE_FILES, STATIC_FILES};

    #[test]
    fn test_file_response_cache_headers() {
        let archive = build_file_response(Bytes::from_static(b"abc"), "image/png", ARCHIVE_FILES, false);
        assert_eq!(archive.status(), 200);
        assert_eq!(archive.headers()["Cache-Control"], "public, max-age=3600");
        assert_eq!(archive.headers()["Content-Length"], "3");

        let front = build_file_response(Bytes::from_static(b"abc"), "text/html", STATIC_FILES, false);
        assert!(front.headers().get("Cache-Control").is_none());
        assert!(front.headers().get("Accept-Ranges").is_none());
    }

    #[test]
    fn test_partial_response_headers() {
        let data = Bytes::from_static(b"0123456789");
        let resp = build_partial_response(
            &data,
            ByteRange { start: 2, end: 5 },
            "video/mp4",
            ARCHIVE_FILES,
            false,
        );
        assert_eq!(resp.status(), 206);
        assert_eq!(resp.headers()["Content-Range"], "bytes 2-5/10");
        assert_eq!(resp.headers()["Content-Length"], "4");
    }

    #[test]
    fn test_error_responses() {
        assert_eq!(build_404_response().status(), 404);
        assert_eq!(build_405_response().headers()["Allow"], "GET, HEAD, OPTIONS");
        assert_eq!(build_416_response(10).headers()["Content-Range"], "bytes */10");
        assert_eq!(build_500_response().status(), 500);
        assert_eq!(
            build_options_response().headers()["Access-Control-Allow-Origin"],
            "*"
        );
    }
}
