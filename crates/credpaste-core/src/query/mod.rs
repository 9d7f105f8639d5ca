//! Request URL and query parameters from a curl command.
//!
//! Some platforms sign query parameters together with headers, so the
//! account form keeps the captured parameters next to the headers.

mod decode;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ParseError;
use crate::headers::shell::{curl_url, tokenize};

pub use decode::percent_decode;

/// Key under which [`UrlQueryResult::into_params_with_base`] stores the URL.
pub const BASE_URL_KEY: &str = "base_url";

/// URL without its query string, plus the decoded query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlQueryResult {
    pub base_url: String,
    pub params: BTreeMap<String, String>,
}

impl UrlQueryResult {
    /// Parameters with `base_url` added as one more entry, the shape stored
    /// on an account record.
    pub fn into_params_with_base(self) -> BTreeMap<String, String> {
        let mut params = self.params;
        params.insert(BASE_URL_KEY.to_string(), self.base_url);
        params
    }
}

/// Extracts the URL that directly follows `curl` and splits its query string.
///
/// Only `curl '<url>'` is recognized; the URL must be the first argument and
/// single-quoted. Query pairs with an empty key or value are skipped, values
/// are percent-decoded, keys are kept as written, and the last duplicate wins.
///
/// # Errors
///
/// [`ParseError::NoUrlFound`] if no such URL is present.
pub fn parse_curl_url_and_params(command: &str) -> Result<UrlQueryResult, ParseError> {
    let tokens = tokenize(command);
    let url = curl_url(&tokens)
        .filter(|url| !url.trim().is_empty())
        .ok_or(ParseError::NoUrlFound)?;

    let (base_url, query) = match url.split_once('?') {
        Some((base, query)) => (base, query),
        None => (url, ""),
    };
    let query = query.split_once('#').map_or(query, |(q, _)| q);

    let mut params = BTreeMap::new();
    for pair in query.split('&') {
        match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() && !value.is_empty() => {
                params.insert(key.to_string(), percent_decode(value));
            }
            _ => {
                if !pair.is_empty() {
                    tracing::trace!(pair, "skipping query pair without key or value");
                }
            }
        }
    }

    tracing::debug!(base_url, params = params.len(), "parsed curl URL");
    Ok(UrlQueryResult {
        base_url: base_url.to_string(),
        params,
    })
}
