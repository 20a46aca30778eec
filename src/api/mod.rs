// API module entry
// Archive query API served under /api and /api.php

mod handlers;
mod query;
mod response;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::config::AppState;
use crate::handler::router::RequestContext;

use query::QueryParams;
use response::invalid_action;

pub use response::fault_response;

/// Paths answered by the API instead of the static file server
pub const API_PATHS: &[&str] = &["/api", "/api.php"];

/// Supported values of the `action` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ListDates,
    ListStories,
    GetFile,
    ListAvatars,
    ListProfileSnapshots,
    ListResharedUsersStories,
    /// Missing or unrecognized action
    Unknown,
}

impl Action {
    pub fn from_query(action: Option<&str>) -> Self {
        match action {
            Some("list-dates") => Self::ListDates,
            Some("list-stories") => Self::ListStories,
            Some("get-file") => Self::GetFile,
            Some("list-avatars") => Self::ListAvatars,
            Some("list-profile-snapshots") => Self::ListProfileSnapshots,
            Some("list-reshared-users-stories") => Self::ListResharedUsersStories,
            _ => Self::Unknown,
        }
    }
}

/// API route handler
///
/// Dispatches on the `action` query parameter.
pub async fn handle_api(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let params = QueryParams::parse(ctx.query);

    match Action::from_query(params.get("action")) {
        Action::ListDates => handlers::list_dates(state).await,
        Action::ListStories => handlers::list_stories(state, params.get("date")).await,
        Action::GetFile => handlers::get_file(ctx, state, params.get("path")).await,
        Action::ListAvatars => handlers::list_avatars(state).await,
        Action::ListProfileSnapshots => handlers::list_profile_snapshots(state).await,
        Action::ListResharedUsersStories => handlers::list_reshared_users_stories(state).await,
        Action::Unknown => invalid_action(),
    }
}
