// Application state module
// Immutable state shared by every connection

use std::path::Path;

use super::types::Config;

/// Application state
///
/// Built once in `main` and handed to each connection behind an `Arc`.
pub struct AppState {
    pub config: Config,
    /// Lowercased copy of `archive.snapshot_excluded_users`
    pub excluded_snapshot_users: Vec<String>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let excluded_snapshot_users = config
            .archive
            .snapshot_excluded_users
            .iter()
            .map(|u| u.to_lowercase())
            .collect();

        Self {
            config: config.clone(),
            excluded_snapshot_users,
        }
    }

    pub fn archive_root(&self) -> &Path {
        &self.config.archive.root
    }

    pub fn auto_export_root(&self) -> &Path {
        &self.config.archive.auto_export_root
    }

    pub fn static_root(&self) -> &Path {
        &self.config.static_files.root
    }

    pub const fn access_log(&self) -> bool {
        self.config.logging.access_log
    }
}
