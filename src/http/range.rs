//! HTTP Range request parsing module
//!
//! Single `bytes=` ranges (RFC 7233), which is what browsers send when
//! seeking in archived videos. Multi-range requests are answered in full.

/// Inclusive byte range already clamped to the file size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// `Content-Range` header value
    pub fn content_range(&self, total_size: usize) -> String {
        format!("bytes {}-{}/{total_size}", self.start, self.end)
    }
}

/// Range header parse result
#[derive(Debug, PartialEq, Eq)]
pub enum RangeParseResult {
    Valid(ByteRange),
    /// Should be answered with 416
    NotSatisfiable,
    /// No Range header or one we ignore; serve the full body
    None,
}

/// Parse a `Range` header against a body of `file_size` bytes
///
/// Supported forms: `bytes=start-end`, `bytes=start-`, `bytes=-suffix`.
pub fn parse_range_header(range_header: Option<&str>, file_size: usize) -> RangeParseResult {
    let Some(spec) = range_header.and_then(|h| h.trim().strip_prefix("bytes=")) else {
        return RangeParseResult::None;
    };
    if spec.contains(',') {
        return RangeParseResult::None;
    }
    let Some((start_str, end_str)) = spec.split_once('-') else {
        return RangeParseResult::None;
    };
    let (start_str, end_str) = (start_str.trim(), end_str.trim());

    if file_size == 0 {
        return RangeParseResult::NotSatisfiable;
    }
    let last = file_size - 1;

    if start_str.is_empty() {
        // Suffix: the last N bytes
        return match end_str.parse::<usize>() {
            Ok(0) => RangeParseResult::NotSatisfiable,
            Ok(suffix) => RangeParseResult::Valid(ByteRange {
                start: file_size.saturating_sub(suffix),
                end: last,
            }),
            Err(_) => RangeParseResult::None,
        };
    }

    let Ok(start) = start_str.parse::<usize>() else {
        return RangeParseResult::None;
    };
    let end = if end_str.is_empty() {
        last
    } else {
        match end_str.parse::<usize>() {
            Ok(e) => e.min(last),
            Err(_) => return RangeParseResult::None,
        }
    };

    if start > end || start > last {
        return RangeParseResult::NotSatisfiable;
    }
    RangeParseResult::Valid(ByteRange { start, end })
}
