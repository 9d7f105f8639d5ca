//! Header extraction from pasted request captures.
//!
//! Three input shapes are supported, each a pure function of its input:
//! raw `Name: value` blocks (browser network inspector), single-quoted curl
//! commands, and `fetch(url, { headers: { ... } })` snippets. All of them
//! produce a [`ParseResult`] normalized by the same policy: header names are
//! trimmed and ASCII lower-cased, and cookie presence is detected without
//! regard to case.

mod curl;
mod fetch;
mod lines;
mod literal;
mod normalize;
pub(crate) mod shell;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use curl::parse_curl_headers;
pub use fetch::parse_fetch_headers;
pub use lines::parse_header_lines;
pub use literal::parse_object_literal;
pub use normalize::{fold_name, has_cookie, split_header_pair, COOKIE};

/// Header name to value. Names are unique; the last insert wins.
pub type HeaderMap = BTreeMap<String, String>;

/// Output of one header parse call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub headers: HeaderMap,
    #[serde(rename = "hasCookie")]
    pub has_cookie: bool,
}

impl ParseResult {
    /// Builds a result from a finished map, deriving the cookie flag.
    pub fn from_headers(headers: HeaderMap) -> Self {
        let has_cookie = has_cookie(&headers);
        Self {
            headers,
            has_cookie,
        }
    }
}

/// Renders headers as `name: value` lines, the format read by
/// [`parse_header_lines`].
pub fn to_header_lines(headers: &HeaderMap) -> String {
    let mut out = String::new();
    for (name, value) in headers {
        out.push_str(name);
        out.push_str(": ");
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// Pretty JSON (2-space indent) for review before submitting an account.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert("cookie".to_string(), "a=1; b=2".to_string());
        h.insert("x-csrf-token".to_string(), "abc".to_string());
        h.insert("referer".to_string(), "https://x.com/home?x=1".to_string());
        h
    }

    #[test]
    fn header_lines_round_trip() {
        let headers = sample();
        let text = to_header_lines(&headers);
        let reparsed = parse_header_lines(&text);
        assert_eq!(reparsed.headers, headers);
        assert!(reparsed.has_cookie);
    }

    #[test]
    fn header_lines_round_trip_refolds_names() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Ladon".to_string(), "v1".to_string());
        let reparsed = parse_header_lines(&to_header_lines(&headers));
        assert_eq!(reparsed.headers.get("x-ladon").map(String::as_str), Some("v1"));
        assert!(!reparsed.has_cookie);
    }

    #[test]
    fn pretty_json_uses_camel_case_flag() {
        let result = ParseResult::from_headers(sample());
        let json = to_pretty_json(&result).unwrap();
        assert!(json.contains("\"hasCookie\": true"));
        assert!(json.contains("\n  \"headers\": {"));
    }

    #[test]
    fn parsers_are_idempotent() {
        let curl = "curl 'https://x.com/a' -H 'Cookie: a=1' -H 'Accept: */*'";
        assert_eq!(parse_curl_headers(curl), parse_curl_headers(curl));

        let lines = "Host: x.com\nCookie: a=1\n";
        assert_eq!(parse_header_lines(lines), parse_header_lines(lines));

        let fetch = r#"fetch("https://x.com", {"headers": {"cookie": "a=1"}});"#;
        assert_eq!(
            parse_fetch_headers(fetch).unwrap(),
            parse_fetch_headers(fetch).unwrap()
        );
    }

    #[test]
    fn from_headers_detects_cookie() {
        assert!(ParseResult::from_headers(sample()).has_cookie);
        assert!(!ParseResult::from_headers(HeaderMap::new()).has_cookie);
    }
}
