//! Header extraction from `fetch(url, { ... })` snippets.

use serde_json::Value;

use super::literal::parse_object_literal;
use super::normalize::fold_name;
use super::{HeaderMap, ParseResult};
use crate::error::ParseError;

/// Extracts the `headers` object from the options argument of a fetch call.
///
/// The snippet may span lines and may end with `;`. Header names are
/// lower-cased; string values are kept verbatim, numbers and booleans are
/// converted to text, other values are dropped.
///
/// # Errors
///
/// - [`ParseError::NoFetchArgs`] if the text is not shaped like a fetch call
///   with an options object as its second argument.
/// - [`ParseError::InvalidLiteral`] if the options object cannot be read.
/// - [`ParseError::NoHeadersProperty`] if it has no `headers` object.
pub fn parse_fetch_headers(snippet: &str) -> Result<ParseResult, ParseError> {
    let options_text = options_argument(snippet).ok_or(ParseError::NoFetchArgs)?;
    let options = parse_object_literal(options_text)?;

    let raw = match options.get("headers") {
        Some(Value::Object(map)) => map,
        _ => return Err(ParseError::NoHeadersProperty),
    };

    let mut headers = HeaderMap::new();
    for (name, value) in raw {
        let name = fold_name(name);
        if name.is_empty() {
            continue;
        }
        let value = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                tracing::debug!(header = %name, kind = value_kind(other), "dropping non-scalar fetch header");
                continue;
            }
        };
        headers.insert(name, value);
    }

    tracing::debug!(headers = headers.len(), "parsed fetch headers");
    Ok(ParseResult::from_headers(headers))
}

/// Slice of `snippet` holding the `{ ... }` second argument, or `None` if the
/// call shape does not match.
fn options_argument(snippet: &str) -> Option<&str> {
    let call = snippet.find("fetch(")? + "fetch(".len();
    let after_url = skip_first_argument(snippet, call)?;

    let rest = &snippet[after_url..];
    let open = after_url + (rest.len() - rest.trim_start().len());
    if !snippet[open..].starts_with('{') {
        return None;
    }

    let tail = snippet.trim_end();
    let tail = tail.strip_suffix(';').unwrap_or(tail).trim_end();
    let tail = tail.strip_suffix(')')?.trim_end();
    if !tail.ends_with('}') || tail.len() <= open {
        return None;
    }
    Some(&snippet[open..tail.len()])
}

/// Skips the first fetch argument and its trailing comma, returning the
/// offset just past the comma.
fn skip_first_argument(snippet: &str, start: usize) -> Option<usize> {
    let bytes = snippet.as_bytes();
    let mut i = start;
    while bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
        i += 1;
    }

    match bytes.get(i) {
        Some(&q @ (b'"' | b'\'' | b'`')) => {
            i += 1;
            loop {
                match bytes.get(i)? {
                    b'\\' => i += 2,
                    &c if c == q => break,
                    _ => i += 1,
                }
            }
            i += 1;
            while bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
                i += 1;
            }
            (bytes.get(i) == Some(&b',')).then_some(i + 1)
        }
        Some(_) => {
            let comma = i + snippet[i..].find(',')?;
            // An empty first argument is not a call shape we recognize.
            (!snippet[i..comma].trim().is_empty()).then_some(comma + 1)
        }
        None => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "bool",
    }
}
