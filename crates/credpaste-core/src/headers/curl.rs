//! Header extraction from single-quoted curl commands.

use super::normalize::{fold_name, split_header_pair, COOKIE};
use super::shell::{flag_values, tokenize};
use super::{HeaderMap, ParseResult};

const HEADER_FLAGS: &[&str] = &["-H", "--header"];
const COOKIE_FLAGS: &[&str] = &["--cookie", "-b"];

/// Collects `-H '...'` / `--header '...'` values into a header map.
///
/// Names are lower-cased. When no `cookie` header is present, the first
/// non-empty `--cookie '...'` (or `-b '...'`) value is used as the cookie.
/// Double-quoted or unquoted header arguments are not recognized. Never
/// fails; an empty map is a valid result.
pub fn parse_curl_headers(command: &str) -> ParseResult {
    let tokens = tokenize(command);
    let mut headers = HeaderMap::new();

    for raw in flag_values(&tokens, HEADER_FLAGS) {
        match split_header_pair(raw) {
            Some((name, value)) => {
                headers.insert(fold_name(name), value.to_string());
            }
            None => tracing::trace!(header = raw, "skipping malformed curl header"),
        }
    }

    if !headers.contains_key(COOKIE) {
        let cookie = flag_values(&tokens, COOKIE_FLAGS)
            .into_iter()
            .map(str::trim)
            .find(|v| !v.is_empty());
        if let Some(cookie) = cookie {
            tracing::debug!("cookie taken from --cookie argument");
            headers.insert(COOKIE.to_string(), cookie.to_string());
        }
    }

    tracing::debug!(headers = headers.len(), "parsed curl headers");
    ParseResult::from_headers(headers)
}
