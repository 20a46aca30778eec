use std::path::Path;

use super::entries::read_entries;
use super::naming;
use super::{Avatar, AVATARS_FOLDER};
use crate::error::Result;

/// Avatars stored in `<root>/Avatars`, in filesystem order
pub fn list_avatars(root: &Path) -> Result<Vec<Avatar>> {
    let dir = root.join(AVATARS_FOLDER);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let avatars = read_entries(&dir)?
        .into_iter()
        .filter_map(|entry| {
            let username = naming::avatar_username(&entry.name)?.to_string();
            Some(Avatar {
                username,
                path: format!("{AVATARS_FOLDER}/{}", entry.name),
                filename: entry.name,
            })
        })
        .collect();

    Ok(avatars)
}
