use std::path::Path;

use super::entries::date_dirs;
use crate::error::Result;

/// Date partitions under `root`, newest first
///
/// Only the name is checked; `YYYYMMDD` sorts lexicographically in
/// chronological order. A missing root is an empty archive.
pub fn list_dates(root: &Path) -> Result<Vec<String>> {
    let mut dates: Vec<String> = date_dirs(root)?.into_iter().map(|e| e.name).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    Ok(dates)
}
