//! Naming conventions of the archive
//!
//! Everything the archive encodes in file and directory names: date
//! partitions, media extensions, avatar names and the many shapes a profile
//! snapshot filename can take.

use regex::Regex;
use std::sync::LazyLock;

use super::MediaType;

/// Extensions accepted as stories in the main archive
pub const STORY_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "mp4"];
/// Extensions accepted in the auto-export reshared stories
pub const RESHARED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "mp4"];
/// Extensions accepted as profile snapshots
pub const SNAPSHOT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

static AVATAR_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+)_avatar_[0-9]{8}\.(jpg|jpeg|png)$").expect("valid avatar pattern")
});

// First match wins, so the more specific shapes come first
static SNAPSHOT_STEMS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^(.+)_profile_[0-9]{8}$",
        r"^(.+)_profile_[0-9]{8}_[0-9]{6}$",
        r"^(.+)_[0-9]{8}_[0-9]{6}$",
        r"^(.+)_account_[0-9]{8}$",
        r"^(.+)_capture_[0-9]{8}$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid snapshot pattern"))
    .collect()
});

/// `YYYYMMDD`: exactly eight ASCII digits
pub fn is_date_name(name: &str) -> bool {
    name.len() == 8 && name.bytes().all(|b| b.is_ascii_digit())
}

/// Lowercased text after the last dot, if any
///
/// `".mp4"` has extension `mp4`; `"mp4"` has none.
fn extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Text before the last dot (the whole name when there is no dot)
fn stem(filename: &str) -> &str {
    filename.rsplit_once('.').map_or(filename, |(stem, _)| stem)
}

/// Classify `filename` if its extension is one of `allowed`
pub fn media_type(filename: &str, allowed: &[&str]) -> Option<MediaType> {
    let ext = extension(filename)?;
    if !allowed.contains(&ext.as_str()) {
        return None;
    }
    if ext == "mp4" {
        Some(MediaType::Video)
    } else {
        Some(MediaType::Image)
    }
}

/// Username encoded in an avatar filename (`<user>_avatar_YYYYMMDD.<img>`)
pub fn avatar_username(filename: &str) -> Option<&str> {
    AVATAR_NAME
        .captures(filename)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Raw username encoded in a profile snapshot filename
///
/// Falls back to the whole stem when no known shape matches.
pub fn snapshot_username(filename: &str) -> &str {
    let stem = stem(filename);
    SNAPSHOT_STEMS
        .iter()
        .find_map(|re| re.captures(stem).and_then(|c| c.get(1)))
        .map_or(stem, |m| m.as_str())
}

/// Fold spelling variants (`_jane_`, `.Jane`, `jane`) onto one key
pub fn normalize_username(username: &str) -> String {
    username
        .trim_matches(|c| c == '.' || c == '_')
        .to_lowercase()
}
