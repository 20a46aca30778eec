// Archive API handlers module
//
// Directory scans are blocking and run on the blocking pool; file reads go
// through tokio::fs.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde::Serialize;

use super::response::{fault_response, json_response};
use crate::archive;
use crate::config::AppState;
use crate::error::Result;
use crate::handler::router::RequestContext;
use crate::handler::static_files;
use crate::http::{self, cache, mime};
use crate::logger;

/// Run a blocking archive scan and answer with its JSON
async fn scan<T, F>(scan: F) -> Response<Full<Bytes>>
where
    T: Serialize + Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    match tokio::task::spawn_blocking(scan).await {
        Ok(Ok(value)) => json_response(&value),
        Ok(Err(e)) => fault_response(&e),
        Err(e) => {
            logger::log_error(&format!("Archive scan task failed: {e}"));
            http::build_500_response()
        }
    }
}

pub async fn list_dates(state: &AppState) -> Response<Full<Bytes>> {
    let root = state.archive_root().to_path_buf();
    scan(move || archive::list_dates(&root)).await
}

pub async fn list_stories(state: &AppState, date: Option<&str>) -> Response<Full<Bytes>> {
    let Some(date) = date else {
        return json_response(&[] as &[archive::Story]);
    };
    let root = state.archive_root().to_path_buf();
    let date = date.to_string();
    scan(move || archive::list_stories(&root, &date)).await
}

pub async fn list_avatars(state: &AppState) -> Response<Full<Bytes>> {
    let root = state.archive_root().to_path_buf();
    scan(move || archive::list_avatars(&root)).await
}

pub async fn list_profile_snapshots(state: &AppState) -> Response<Full<Bytes>> {
    let root = state.auto_export_root().to_path_buf();
    let excluded = state.excluded_snapshot_users.clone();
    scan(move || archive::list_profile_snapshots(&root, &excluded)).await
}

pub async fn list_reshared_users_stories(state: &AppState) -> Response<Full<Bytes>> {
    let root = state.auto_export_root().to_path_buf();
    scan(move || archive::list_reshared_user_stories(&root)).await
}

/// Serve one archive file with public caching and Range support
///
/// A missing `path` parameter is a 404, never an empty JSON body.
pub async fn get_file(
    ctx: &RequestContext<'_>,
    state: &AppState,
    path: Option<&str>,
) -> Response<Full<Bytes>> {
    let Some(relative) = path else {
        return http::build_404_response();
    };

    let full_path =
        match archive::resolve_archive_path(state.archive_root(), state.auto_export_root(), relative)
        {
            Ok(p) => p,
            Err(e) => return fault_response(&e),
        };

    match static_files::load_file(&full_path).await {
        Ok(data) => static_files::file_response(
            ctx,
            data,
            mime::guess(&full_path, mime::ARCHIVE_FALLBACK),
            cache::ARCHIVE_FILES,
        ),
        Err(e) => fault_response(&e),
    }
}
