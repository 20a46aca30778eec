//! Client-supplied path resolution
//!
//! Relative paths from query strings are joined component by component and
//! refused as soon as one would leave the root (`..`, `/`, drive prefixes).

use std::path::{Component, Path, PathBuf};

use super::AUTO_EXPORT_PREFIX;
use crate::error::{ArchiveError, Result};

/// Join `relative` under `root` without letting it escape
pub fn resolve_within(root: &Path, relative: &str) -> Result<PathBuf> {
    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ArchiveError::InvalidPath(relative.to_string()));
            }
        }
    }
    Ok(resolved)
}

/// Resolve a `get-file` path
///
/// `AutoExport/...` lives under the auto-export root; everything else under
/// the archive root.
pub fn resolve_archive_path(
    archive_root: &Path,
    auto_export_root: &Path,
    relative: &str,
) -> Result<PathBuf> {
    match relative
        .strip_prefix(AUTO_EXPORT_PREFIX)
        .and_then(|rest| rest.strip_prefix('/'))
    {
        Some(rest) => resolve_within(auto_export_root, rest),
        None => resolve_within(archive_root, relative),
    }
}

/// Whether `name` is exactly one ordinary path component
pub fn is_plain_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part == name
    )
}
