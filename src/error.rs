//! Archive error types

use std::path::PathBuf;

/// Errors raised while resolving or reading the archive
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// Requested file or required parameter is missing
    #[error("not found: {0}")]
    NotFound(String),
    /// Relative path escapes its root (`..`, absolute or prefixed)
    #[error("path escapes archive root: {0}")]
    InvalidPath(String),
    #[error("failed to read {path}: {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize response: {0}")]
    Json(#[from] serde_json::Error),
}

impl ArchiveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
