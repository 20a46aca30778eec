//! HTTP protocol layer module
//!
//! MIME detection, Range parsing, cache policy and response builders shared by
//! the archive API and the front-end file server.

pub mod cache;
pub mod mime;
pub mod range;
pub mod response;

// Re-export commonly used types
pub use range::{parse_range_header, RangeParseResult};
pub use response::{
    build_404_response, build_405_response, build_416_response, build_500_response,
    build_file_response, build_options_response, build_partial_response,
};
