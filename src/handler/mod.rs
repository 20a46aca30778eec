//! Request handler module
//!
//! Routes each request to the archive API or to the front-end file server.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
