//! Logger module
//!
//! Thin facade over `tracing` so call sites read like the events they report:
//! - Server lifecycle logging
//! - Optional per-request access lines (off by default)
//! - Error and warning logging

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

/// Target used for access log lines, so they can be filtered on their own
pub const ACCESS_TARGET: &str = "access";

/// Initialize the global subscriber
///
/// `RUST_LOG` wins over `logging.level` when set. Should be called once at
/// application startup.
pub fn init(config: &Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))?;

    fmt().with_env_filter(filter).with_target(false).try_init()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    tracing::info!("Server running at http://{addr}");
    tracing::info!("Archive path: {}", config.archive.root.display());
    tracing::info!(
        "Auto-export path: {}",
        config.archive.auto_export_root.display()
    );
    tracing::info!("Static root: {}", config.static_files.root.display());
    if let Some(workers) = config.server.workers {
        tracing::info!("Worker threads: {workers}");
    }
    if config.logging.access_log {
        tracing::info!("Access log format: {}", config.logging.access_log_format);
    }
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    tracing::debug!("Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    tracing::error!("{message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("{message}");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    tracing::info!(target: ACCESS_TARGET, "{}", entry.format(format));
}

pub fn log_shutdown(in_flight: usize) {
    tracing::info!(in_flight, "Shutdown signal received, draining connections");
}
