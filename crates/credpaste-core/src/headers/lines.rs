//! Raw `Name: value` header blocks, as copied from a browser's network panel.

use super::normalize::{fold_name, split_header_pair};
use super::{HeaderMap, ParseResult};

/// Parses one header per line.
///
/// Lines without a colon, or with an empty name or value, are skipped. This
/// drops request/status lines (`GET /path HTTP/2`) and HTTP/2 pseudo headers
/// (`:authority: ...`). Never fails.
pub fn parse_header_lines(text: &str) -> ParseResult {
    let mut headers = HeaderMap::new();
    let mut skipped = 0usize;

    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match split_header_pair(line) {
            Some((name, value)) => {
                headers.insert(fold_name(name), value.to_string());
            }
            None => {
                skipped += 1;
                tracing::trace!(line = lineno + 1, "skipping malformed header line");
            }
        }
    }

    tracing::debug!(headers = headers.len(), skipped, "parsed header lines");
    ParseResult::from_headers(headers)
}
