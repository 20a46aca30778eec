// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub archive: ArchiveConfig,
    pub static_files: StaticFilesConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Archive locations
#[derive(Debug, Deserialize, Clone)]
pub struct ArchiveConfig {
    /// Top-level directory holding one subdirectory per date
    pub root: PathBuf,
    /// Root of the auto-export tree (`AccountCaptures`, `AllResharedUserStories`)
    pub auto_export_root: PathBuf,
    /// Usernames skipped when listing profile snapshots (case-insensitive substring)
    #[serde(default)]
    pub snapshot_excluded_users: Vec<String>,
}

/// Static front-end serving
#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesConfig {
    pub root: PathBuf,
    pub index_file: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Upper bound for a single connection, in seconds (0, the default, disables)
    pub connection_timeout: u64,
}
