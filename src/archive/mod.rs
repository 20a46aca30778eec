//! Archive scanning module
//!
//! Pure filesystem functions over the story archive. Every listing takes the
//! root it scans as an argument and re-reads the tree on each call, so the
//! HTTP layer only has to pick the root and serialize the result.
//!
//! Layout of the main archive:
//!
//! ```text
//! <root>/
//!   Avatars/<user>_avatar_YYYYMMDD.jpg
//!   YYYYMMDD/
//!     AccountCaptures/        (reserved, never a user)
//!     <user>/<story files>
//! ```
//!
//! Layout of the auto-export tree:
//!
//! ```text
//! <auto_export_root>/
//!   YYYYMMDD/
//!     AccountCaptures/<snapshot images>
//!     AllResharedUserStories/<user>/<story files>
//! ```

mod avatars;
mod dates;
mod entries;
mod naming;
mod resolve;
mod snapshots;
mod stories;

use serde::Serialize;

pub use avatars::list_avatars;
pub use dates::list_dates;
pub use resolve::{resolve_archive_path, resolve_within};
pub use snapshots::list_profile_snapshots;
pub use stories::{list_reshared_user_stories, list_stories};

/// Folder inside a date directory that holds account captures, not a user
pub const RESERVED_FOLDER: &str = "AccountCaptures";
/// Folder under the archive root holding avatar images
pub const AVATARS_FOLDER: &str = "Avatars";
/// Folder under an auto-export date holding reshared stories per user
pub const RESHARED_FOLDER: &str = "AllResharedUserStories";
/// Prefix of `get-file` paths that live in the auto-export tree
pub const AUTO_EXPORT_PREFIX: &str = "AutoExport";

/// Kind of media a story file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

/// One archived story file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Story {
    pub username: String,
    pub filename: String,
    /// `date/username/filename`, relative to the archive root
    pub path: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub date: String,
}

/// Story reshared by another account, found in the auto-export tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResharedStory {
    pub username: String,
    pub filename: String,
    /// `AutoExport/date/AllResharedUserStories/username/filename`
    pub path: String,
    pub date: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
}

/// Avatar image of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Avatar {
    pub username: String,
    pub filename: String,
    /// `Avatars/filename`
    pub path: String,
}

/// Profile screenshot captured on a given date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSnapshot {
    pub username: String,
    pub filename: String,
    /// `AutoExport/date/AccountCaptures/filename`
    pub path: String,
    pub date: String,
}
