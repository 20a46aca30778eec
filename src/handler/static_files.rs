//! Static file serving module
//!
//! Loads files from disk and turns them into responses. Front-end files are
//! always sent whole; the archive `get-file` action shares the loading and
//! adds Range handling on top.

use crate::archive;
use crate::config::AppState;
use crate::error::{ArchiveError, Result};
use crate::handler::router::RequestContext;
use crate::http::{self, cache, cache::CachePolicy, mime, RangeParseResult};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a front-end file relative to the static root
///
/// `/` and the empty path map to the configured index file.
pub async fn serve_static(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let relative = ctx.path.trim_start_matches('/');
    let relative = if relative.is_empty() {
        state.config.static_files.index_file.as_str()
    } else {
        relative
    };

    let file_path = match archive::resolve_within(state.static_root(), relative) {
        Ok(p) => p,
        Err(e) => return crate::api::fault_response(&e),
    };

    match load_file(&file_path).await {
        Ok(data) => http::build_file_response(
            data,
            mime::guess(&file_path, mime::STATIC_FALLBACK),
            cache::STATIC_FILES,
            ctx.is_head,
        ),
        Err(e) => crate::api::fault_response(&e),
    }
}

/// Read a whole regular file
///
/// Anything that cannot be stat'ed, and directories, count as not found;
/// a read failure after that is an I/O fault.
pub async fn load_file(path: &Path) -> Result<Bytes> {
    let not_found = || ArchiveError::NotFound(path.display().to_string());

    let metadata = fs::metadata(path).await.map_err(|_| not_found())?;
    if !metadata.is_file() {
        return Err(not_found());
    }

    fs::read(path)
        .await
        .map(Bytes::from)
        .map_err(|e| ArchiveError::io(path, e))
}

/// Build the response for a loaded file, honouring a single `Range`
pub fn file_response(
    ctx: &RequestContext<'_>,
    data: Bytes,
    content_type: &str,
    policy: CachePolicy,
) -> Response<Full<Bytes>> {
    match http::parse_range_header(ctx.range_header, data.len()) {
        RangeParseResult::Valid(range) => {
            http::build_partial_response(&data, range, content_type, policy, ctx.is_head)
        }
        RangeParseResult::NotSatisfiable => http::build_416_response(data.len()),
        RangeParseResult::None => {
            http::build_file_response(data, content_type, policy, ctx.is_head)
        }
    }
}
