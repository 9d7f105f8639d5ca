//! Normalization policy shared by every header parser.

use super::HeaderMap;

/// Canonical (folded) cookie header name.
pub const COOKIE: &str = "cookie";

/// Canonical form of a header name: trimmed and ASCII lower-cased.
pub fn fold_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// True if any header is named `cookie`, ignoring case.
pub fn has_cookie(headers: &HeaderMap) -> bool {
    headers.keys().any(|k| k.eq_ignore_ascii_case(COOKIE))
}

/// Splits `Name: value` on the first colon.
///
/// Both sides are trimmed; the value keeps any further colons. Returns `None`
/// when there is no colon or either side is empty.
pub fn split_header_pair(text: &str) -> Option<(&str, &str)> {
    let (name, value) = text.split_once(':')?;
    let name = name.trim();
    let value = value.trim();
    if name.is_empty() || value.is_empty() {
        return None;
    }
    Some((name, value))
}
