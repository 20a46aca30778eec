// Directory enumeration helpers shared by the archive listings

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ArchiveError, Result};

/// A directory child with its UTF-8 name
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
}

impl Entry {
    /// Follows symlinks, like the rest of the archive tooling expects
    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }
}

/// List the children of `dir` in filesystem order
///
/// Names that are not valid UTF-8 cannot appear in a JSON listing and are skipped.
pub fn read_entries(dir: &Path) -> Result<Vec<Entry>> {
    let iter = fs::read_dir(dir).map_err(|e| ArchiveError::io(dir, e))?;

    let mut entries = Vec::new();
    for entry in iter {
        let entry = entry.map_err(|e| ArchiveError::io(dir, e))?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        entries.push(Entry {
            name,
            path: entry.path(),
        });
    }
    Ok(entries)
}

/// Names of the date directories (`YYYYMMDD`) directly under `root`
///
/// A missing root yields an empty list.
pub fn date_dirs(root: &Path) -> Result<Vec<Entry>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }
    Ok(read_entries(root)?
        .into_iter()
        .filter(|e| super::naming::is_date_name(&e.name))
        .collect())
}
