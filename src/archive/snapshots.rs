use std::path::Path;

use super::entries::{date_dirs, read_entries};
use super::naming::{self, SNAPSHOT_EXTENSIONS};
use super::{ProfileSnapshot, AUTO_EXPORT_PREFIX, RESERVED_FOLDER};
use crate::error::Result;

/// Profile snapshots across every date of the auto-export tree
///
/// `excluded` holds lowercased fragments; a snapshot whose raw username
/// contains one of them is skipped.
pub fn list_profile_snapshots(
    auto_export_root: &Path,
    excluded: &[String],
) -> Result<Vec<ProfileSnapshot>> {
    let mut snapshots = Vec::new();

    for date in date_dirs(auto_export_root)? {
        let captures_dir = date.path.join(RESERVED_FOLDER);
        if !captures_dir.is_dir() {
            continue;
        }

        for file in read_entries(&captures_dir)? {
            if naming::media_type(&file.name, SNAPSHOT_EXTENSIONS).is_none() {
                continue;
            }

            let raw = naming::snapshot_username(&file.name);
            let lowered = raw.to_lowercase();
            if excluded.iter().any(|x| lowered.contains(x.as_str())) {
                continue;
            }

            let username = naming::normalize_username(raw);
            if username.is_empty() {
                continue;
            }

            snapshots.push(ProfileSnapshot {
                username,
                path: format!(
                    "{AUTO_EXPORT_PREFIX}/{}/{RESERVED_FOLDER}/{}",
                    date.name, file.name
                ),
                filename: file.name,
                date: date.name.clone(),
            });
        }
    }

    Ok(snapshots)
}
