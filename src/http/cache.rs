//! HTTP cache control module

/// Cache-Control policy attached to a file response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Public cache with specified max-age (seconds)
    Public(u32),
    /// Send no Cache-Control header at all
    Unspecified,
}

/// Archive media never changes once written
pub const ARCHIVE_FILES: CachePolicy = CachePolicy::Public(3600);
/// The front-end is served without caching hints
pub const STATIC_FILES: CachePolicy = CachePolicy::Unspecified;

impl CachePolicy {
    /// Convert to Cache-Control header value
    pub fn to_header_value(self) -> Option<String> {
        match self {
            Self::Public(max_age) => Some(format!("public, max-age={max_age}")),
            Self::Unspecified => None,
        }
    }
}
