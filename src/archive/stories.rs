use std::path::Path;

use super::entries::{date_dirs, read_entries};
use super::naming::{self, RESHARED_EXTENSIONS, STORY_EXTENSIONS};
use super::resolve::is_plain_component;
use super::{ResharedStory, Story, AUTO_EXPORT_PREFIX, RESERVED_FOLDER, RESHARED_FOLDER};
use crate::error::Result;

/// Stories archived for `date`, in filesystem enumeration order
///
/// An empty or unknown date, or one that is not a single path component,
/// yields an empty list.
pub fn list_stories(root: &Path, date: &str) -> Result<Vec<Story>> {
    if date.is_empty() || !is_plain_component(date) {
        return Ok(Vec::new());
    }

    let date_dir = root.join(date);
    if !date_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut stories = Vec::new();
    for user in read_entries(&date_dir)? {
        if user.name == RESERVED_FOLDER || !user.is_dir() {
            continue;
        }

        for file in read_entries(&user.path)? {
            let Some(media_type) = naming::media_type(&file.name, STORY_EXTENSIONS) else {
                continue;
            };
            stories.push(Story {
                path: format!("{date}/{}/{}", user.name, file.name),
                username: user.name.clone(),
                filename: file.name,
                media_type,
                date: date.to_string(),
            });
        }
    }

    Ok(stories)
}

/// Reshared stories across every date of the auto-export tree
pub fn list_reshared_user_stories(auto_export_root: &Path) -> Result<Vec<ResharedStory>> {
    let mut stories = Vec::new();

    for date in date_dirs(auto_export_root)? {
        let reshared_dir = date.path.join(RESHARED_FOLDER);
        if !reshared_dir.is_dir() {
            continue;
        }

        for user in read_entries(&reshared_dir)? {
            if !user.is_dir() {
                continue;
            }

            for file in read_entries(&user.path)? {
                let Some(media_type) = naming::media_type(&file.name, RESHARED_EXTENSIONS) else {
                    continue;
                };
                stories.push(ResharedStory {
                    path: format!(
                        "{AUTO_EXPORT_PREFIX}/{}/{RESHARED_FOLDER}/{}/{}",
                        date.name, user.name, file.name
                    ),
                    username: user.name.clone(),
                    filename: file.name,
                    date: date.name.clone(),
                    media_type,
                });
            }
        }
    }

    Ok(stories)
}
