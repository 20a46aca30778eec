// API response utility functions module

use crate::error::ArchiveError;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Body returned for an unknown or missing `action`
const INVALID_ACTION_BODY: &str = r#"{"error":"Invalid action"}"#;

/// Build a 200 JSON response open to any origin
pub fn json_response<T: Serialize + ?Sized>(body: &T) -> Response<Full<Bytes>> {
    match serde_json::to_vec(body) {
        Ok(json) => json_bytes_response(Bytes::from(json)),
        Err(e) => fault_response(&ArchiveError::from(e)),
    }
}

/// `{"error": "Invalid action"}`, still with status 200
pub fn invalid_action() -> Response<Full<Bytes>> {
    json_bytes_response(Bytes::from_static(INVALID_ACTION_BODY.as_bytes()))
}

fn json_bytes_response(json: Bytes) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(json))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// Map an archive error to 404 or, for anything unexpected, 500
pub fn fault_response(err: &ArchiveError) -> Response<Full<Bytes>> {
    match err {
        // Missing files are routine, no need to log them
        ArchiveError::NotFound(_) => http::build_404_response(),
        ArchiveError::InvalidPath(path) => {
            logger::log_warning(&format!("Path traversal attempt blocked: {path}"));
            http::build_404_response()
        }
        ArchiveError::Io { .. } | ArchiveError::Json(_) => {
            logger::log_error(&err.to_string());
            http::build_500_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_headers() {
        let resp = json_response(&["20240101", "20231231"]);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
    }

    #[test]
    fn test_invalid_action_is_ok() {
        let resp = invalid_action();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
    }

    #[test]
    fn test_fault_mapping() {
        let not_found = fault_response(&ArchiveError::NotFound("x".to_string()));
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        let io = ArchiveError::io("/x", std::io::Error::other("boom"));
        assert_eq!(fault_response(&io).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
