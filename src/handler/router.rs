//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, then either
//! the archive API or the front-end file server.

use crate::api;
use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
    pub range_header: Option<&'a str>,
}

/// Main entry point for HTTP request handling
///
/// Generic over the body type: the body is dropped unread.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let parts = req.into_parts().0;
    let method = &parts.method;
    let uri = &parts.uri;

    let response = match check_http_method(method) {
        Some(resp) => resp,
        None => {
            let ctx = RequestContext {
                path: uri.path(),
                query: uri.query(),
                is_head: *method == Method::HEAD,
                range_header: parts
                    .headers
                    .get(hyper::header::RANGE)
                    .and_then(|v| v.to_str().ok()),
            };
            route_request(&ctx, &state).await
        }
    };

    if state.access_log() {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            uri.path().to_string(),
        );
        entry.query = uri.query().map(ToString::to_string);
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or_default();
        entry.user_agent = parts
            .headers
            .get(hyper::header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => Some(http::build_405_response()),
    }
}

/// `/api` and `/api.php` go to the archive API, everything else is static
async fn route_request(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    if api::API_PATHS.contains(&ctx.path) {
        api::handle_api(ctx, state).await
    } else {
        static_files::serve_static(ctx, state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct Fixture {
        _archive: TempDir,
        _front: TempDir,
        state: Arc<AppState>,
    }

    fn fixture() -> Fixture {
        let archive = TempDir::new().unwrap();
        let front = TempDir::new().unwrap();

        let write = |path: &Path, data: &[u8]| {
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, data).unwrap();
        };

        let root = archive.path().join("archive");
        write(&root.join("20240101/jane/photo.JPG"), b"jpeg-bytes");
        write(&root.join("20240101/jane/clip.mp4"), b"0123456789");
        write(&root.join("20240101/jane/notes.txt"), b"notes");
        write(&root.join("20240101/AccountCaptures/cap.png"), b"png");
        fs::create_dir_all(root.join("20231231")).unwrap();
        fs::create_dir_all(root.join("notadate")).unwrap();
        write(&root.join("Avatars/jane_avatar_20240101.png"), b"avatar");

        let export = archive.path().join("export");
        write(
            &export.join("20240101/AccountCaptures/jane_profile_20240101.png"),
            b"snap",
        );
        write(
            &export.join("20240101/AllResharedUserStories/bob/reel.mp4"),
            b"reel",
        );

        write(&front.path().join("index.html"), b"<html></html>");
        write(&front.path().join("photo.JPG"), b"jpeg-bytes");
        write(&front.path().join("LICENSE"), b"MIT");

        let mut config = Config::load_from("definitely-missing-config-file").unwrap();
        config.archive.root = root;
        config.archive.auto_export_root = export;
        config.static_files.root = front.path().to_path_buf();

        Fixture {
            state: Arc::new(AppState::new(&config)),
            _archive: archive,
            _front: front,
        }
    }

    async fn get(state: &Arc<AppState>, uri: &str) -> Response<Full<Bytes>> {
        send(state, Request::get(uri).body(()).unwrap()).await
    }

    async fn send(state: &Arc<AppState>, req: Request<()>) -> Response<Full<Bytes>> {
        let peer: SocketAddr = "127.0.0.1:40000".parse().unwrap();
        handle_request(req, Arc::clone(state), peer).await.unwrap()
    }

    async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    async fn body_json(resp: Response<Full<Bytes>>) -> serde_json::Value {
        serde_json::from_slice(&body_bytes(resp).await).unwrap()
    }

    #[tokio::test]
    async fn test_list_dates() {
        let fx = fixture();
        let resp = get(&fx.state, "/api?action=list-dates").await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(
            body_json(resp).await,
            serde_json::json!(["20240101", "20231231"])
        );
    }

    #[tokio::test]
    async fn test_api_php_alias() {
        let fx = fixture();
        let resp = get(&fx.state, "/api.php?action=list-dates").await;
        assert_eq!(
            body_json(resp).await,
            serde_json::json!(["20240101", "20231231"])
        );
    }

    #[tokio::test]
    async fn test_list_stories() {
        let fx = fixture();
        let resp = get(&fx.state, "/api?action=list-stories&date=20240101").await;
        let stories = body_json(resp).await;
        let mut stories = stories.as_array().unwrap().clone();
        stories.sort_by_key(|s| s["filename"].as_str().unwrap().to_string());

        assert_eq!(stories.len(), 2);
        assert_eq!(stories[0]["filename"], "clip.mp4");
        assert_eq!(stories[0]["type"], "video");
        assert_eq!(stories[1]["filename"], "photo.JPG");
        assert_eq!(stories[1]["type"], "image");
        assert_eq!(stories[1]["path"], "20240101/jane/photo.JPG");
        assert!(stories.iter().all(|s| s["username"] == "jane"));
    }

    #[tokio::test]
    async fn test_list_stories_missing_or_unknown_date() {
        let fx = fixture();
        for uri in [
            "/api?action=list-stories",
            "/api?action=list-stories&date=",
            "/api?action=list-stories&date=20990101",
        ] {
            let resp = get(&fx.state, uri).await;
            assert_eq!(resp.status(), 200);
            assert_eq!(body_json(resp).await, serde_json::json!([]), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_get_file_bytes_and_cache_header() {
        let fx = fixture();
        let resp = get(&fx.state, "/api?action=get-file&path=20240101/jane/photo.JPG").await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "image/jpeg");
        assert_eq!(resp.headers()["Cache-Control"], "public, max-age=3600");
        assert_eq!(&body_bytes(resp).await[..], b"jpeg-bytes");

        let front = get(&fx.state, "/photo.JPG").await;
        assert_eq!(front.status(), 200);
        assert!(front.headers().get("Cache-Control").is_none());
        assert_eq!(&body_bytes(front).await[..], b"jpeg-bytes");
    }

    #[tokio::test]
    async fn test_get_file_missing() {
        let fx = fixture();
        for uri in [
            "/api?action=get-file",
            "/api?action=get-file&path=",
            "/api?action=get-file&path=20240101/jane/gone.jpg",
            "/api?action=get-file&path=20240101/jane",
            "/api?action=get-file&path=../export/20240101/AccountCaptures/jane_profile_20240101.png",
        ] {
            let resp = get(&fx.state, uri).await;
            assert_eq!(resp.status(), 404, "{uri}");
            assert_ne!(resp.headers()["Content-Type"], "application/json");
        }
    }

    #[tokio::test]
    async fn test_get_file_auto_export_and_text() {
        let fx = fixture();
        let resp = get(
            &fx.state,
            "/api?action=get-file&path=AutoExport%2F20240101%2FAccountCaptures%2Fjane_profile_20240101.png",
        )
        .await;
        assert_eq!(resp.status(), 200);
        assert_eq!(&body_bytes(resp).await[..], b"snap");

        let txt = get(&fx.state, "/api?action=get-file&path=20240101/jane/notes.txt").await;
        assert_eq!(txt.headers()["Content-Type"], "text/plain");
    }

    #[tokio::test]
    async fn test_get_file_range() {
        let fx = fixture();
        let req = Request::get("/api?action=get-file&path=20240101/jane/clip.mp4")
            .header("Range", "bytes=2-5")
            .body(())
            .unwrap();
        let resp = send(&fx.state, req).await;
        assert_eq!(resp.status(), 206);
        assert_eq!(resp.headers()["Content-Range"], "bytes 2-5/10");
        assert_eq!(&body_bytes(resp).await[..], b"2345");
    }

    #[tokio::test]
    async fn test_static_ignores_range() {
        let fx = fixture();
        let req = Request::get("/index.html")
            .header("Range", "bytes=0-1")
            .body(())
            .unwrap();
        let resp = send(&fx.state, req).await;
        assert_eq!(resp.status(), 200);
        assert!(resp.headers().get("Accept-Ranges").is_none());
        assert!(resp.headers().get("Content-Range").is_none());
        assert_eq!(&body_bytes(resp).await[..], b"<html></html>");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_requests_are_independent() {
        let fx = fixture();
        let uris = [
            "/api?action=list-dates",
            "/api?action=list-stories&date=20240101",
            "/api?action=get-file&path=20240101/jane/clip.mp4",
            "/api?action=list-stories&date=20231231",
            "/api?action=get-file&path=20240101/jane/photo.JPG",
            "/index.html",
        ];

        let mut expected = Vec::new();
        for uri in uris {
            let resp = get(&fx.state, uri).await;
            expected.push((resp.status(), body_bytes(resp).await));
        }

        let mut tasks = tokio::task::JoinSet::new();
        for round in 0..8 {
            for (i, uri) in uris.iter().enumerate() {
                let state = Arc::clone(&fx.state);
                let uri = *uri;
                tasks.spawn(async move {
                    // Vary submission order between rounds
                    if (i + round) % 2 == 0 {
                        tokio::task::yield_now().await;
                    }
                    let resp = get(&state, uri).await;
                    (i, resp.status(), body_bytes(resp).await)
                });
            }
        }

        let mut seen = 0;
        while let Some(joined) = tasks.join_next().await {
            let (i, status, body) = joined.unwrap();
            assert_eq!((status, body), expected[i], "{}", uris[i]);
            seen += 1;
        }
        assert_eq!(seen, uris.len() * 8);
    }

    #[tokio::test]
    async fn test_invalid_action() {
        let fx = fixture();
        for uri in ["/api?action=nope", "/api", "/api.php?action=process-video"] {
            let resp = get(&fx.state, uri).await;
            assert_eq!(resp.status(), 200);
            assert_eq!(
                body_json(resp).await,
                serde_json::json!({"error": "Invalid action"})
            );
        }
    }

    #[tokio::test]
    async fn test_auxiliary_listings() {
        let fx = fixture();

        let avatars = body_json(get(&fx.state, "/api?action=list-avatars").await).await;
        assert_eq!(avatars[0]["username"], "jane");
        assert_eq!(avatars[0]["path"], "Avatars/jane_avatar_20240101.png");

        let snaps = body_json(get(&fx.state, "/api?action=list-profile-snapshots").await).await;
        assert_eq!(snaps[0]["username"], "jane");
        assert_eq!(snaps[0]["date"], "20240101");

        let reshared =
            body_json(get(&fx.state, "/api?action=list-reshared-users-stories").await).await;
        assert_eq!(reshared[0]["username"], "bob");
        assert_eq!(reshared[0]["type"], "video");
    }

    #[tokio::test]
    async fn test_static_index_and_fallback_type() {
        let fx = fixture();
        let index = get(&fx.state, "/").await;
        assert_eq!(index.status(), 200);
        assert_eq!(index.headers()["Content-Type"], "text/html");
        assert_eq!(&body_bytes(index).await[..], b"<html></html>");

        let license = get(&fx.state, "/LICENSE").await;
        assert_eq!(license.headers()["Content-Type"], "text/plain");

        assert_eq!(get(&fx.state, "/missing.js").await.status(), 404);
        assert_eq!(get(&fx.state, "/../etc/passwd").await.status(), 404);
    }

    #[tokio::test]
    async fn test_methods() {
        let fx = fixture();
        let post = Request::post("/api?action=list-dates").body(()).unwrap();
        assert_eq!(send(&fx.state, post).await.status(), 405);

        let options = Request::options("/api").body(()).unwrap();
        assert_eq!(send(&fx.state, options).await.status(), 204);

        let head = Request::head("/index.html").body(()).unwrap();
        let resp = send(&fx.state, head).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "13");
        assert!(body_bytes(resp).await.is_empty());
    }
}
