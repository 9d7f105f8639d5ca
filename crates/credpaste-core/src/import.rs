//! Turns one pasted capture into the header/params fields of an account
//! record, with warnings for expected fields that were not found.
//!
//! Header parse failures are fatal for the call. Missing expected fields and
//! params that could not be captured are not: the headers are still usable
//! and the caller shows the warnings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::config::CredpasteConfig;
use crate::error::ParseError;
use crate::headers::{
    parse_curl_headers, parse_fetch_headers, parse_header_lines, HeaderMap, ParseResult,
};
use crate::platform::{missing_fields, Platform};
use crate::query::parse_curl_url_and_params;

/// Shape of the pasted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureFormat {
    /// `curl 'url' -H '...'` as copied from browser dev tools.
    Curl,
    /// Raw `Name: value` lines.
    HeaderLines,
    /// `fetch(url, { headers: { ... } })`.
    Fetch,
}

impl CaptureFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            CaptureFormat::Curl => "curl",
            CaptureFormat::HeaderLines => "headers",
            CaptureFormat::Fetch => "fetch",
        }
    }
}

impl fmt::Display for CaptureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaptureFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "curl" => Ok(CaptureFormat::Curl),
            "headers" | "lines" | "firefox" => Ok(CaptureFormat::HeaderLines),
            "fetch" => Ok(CaptureFormat::Fetch),
            other => Err(format!("unknown capture format '{other}'")),
        }
    }
}

/// What to check and extract besides the headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// Header names reported as missing when absent.
    pub required_headers: Vec<String>,
    /// Extract URL parameters from curl input; a missing URL is then fatal.
    pub capture_params: bool,
}

impl ImportOptions {
    /// Options for `platform` as configured.
    pub fn for_platform(cfg: &CredpasteConfig, platform: Platform) -> Self {
        Self {
            required_headers: cfg.required_headers(platform),
            capture_params: cfg.captures_params(platform),
        }
    }

    /// Only cookie presence is expected; no params.
    pub fn cookie_only() -> Self {
        Self {
            required_headers: vec![crate::headers::COOKIE.to_string()],
            capture_params: false,
        }
    }
}

/// Header and params fields for an account record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountImport {
    pub headers: HeaderMap,
    #[serde(rename = "hasCookie")]
    pub has_cookie: bool,
    /// URL parameters plus `base_url`, when captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<BTreeMap<String, String>>,
    /// Expected header names that were not found.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
    /// Why requested params were not captured.
    #[serde(skip)]
    pub params_error: Option<String>,
}

impl AccountImport {
    /// User-facing warnings; empty when every expected field was found.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !self.missing.is_empty() {
            warnings.push(format!("missing expected fields: {}", self.missing.join(", ")));
        }
        if let Some(reason) = &self.params_error {
            warnings.push(format!("URL parameters not captured: {reason}"));
        }
        warnings
    }

    /// The object written into the account form: headers and, when
    /// captured, params.
    pub fn form_fields(&self) -> serde_json::Result<serde_json::Value> {
        let mut fields = serde_json::Map::new();
        fields.insert("headers".to_string(), serde_json::to_value(&self.headers)?);
        if let Some(params) = &self.params {
            fields.insert("params".to_string(), serde_json::to_value(params)?);
        }
        Ok(serde_json::Value::Object(fields))
    }
}

/// Runs the parser for `format` on `text` and checks the expected fields.
///
/// # Errors
///
/// Any [`ParseError`] of the header parser for `format`. A curl command
/// without a URL only loses its params: the result has `params: None` and
/// a warning.
pub fn import_capture(
    format: CaptureFormat,
    text: &str,
    options: &ImportOptions,
) -> Result<AccountImport, ParseError> {
    let ParseResult {
        headers,
        has_cookie,
    } = match format {
        CaptureFormat::Curl => parse_curl_headers(text),
        CaptureFormat::HeaderLines => parse_header_lines(text),
        CaptureFormat::Fetch => parse_fetch_headers(text)?,
    };

    let mut params_error = None;
    let params = if options.capture_params && format == CaptureFormat::Curl {
        match parse_curl_url_and_params(text) {
            Ok(query) => Some(query.into_params_with_base()),
            Err(err) => {
                tracing::warn!(error = %err, "params not captured, keeping headers");
                params_error = Some(err.to_string());
                None
            }
        }
    } else {
        None
    };

    let missing = missing_fields(&headers, &options.required_headers);
    if !missing.is_empty() {
        tracing::warn!(%format, missing = ?missing, "capture is missing expected fields");
    }

    Ok(AccountImport {
        headers,
        has_cookie,
        params,
        missing,
        params_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIKTOK_CURL: &str = "curl 'https://api16-normal-c-useast1a.tiktokv.com/aweme/v1/general/search/single/?keyword=rust&device_id=7' \
        -H 'X-Ladon: l' -H 'X-Khronos: 1700000000' -H 'X-Argus: a' -H 'X-Gorgon: g' \
        -H 'Cookie: sessionid=s'";

    #[test]
    fn tiktok_curl_with_params() {
        let cfg = CredpasteConfig::default();
        let opts = ImportOptions::for_platform(&cfg, Platform::Tiktok);
        let r = import_capture(CaptureFormat::Curl, TIKTOK_CURL, &opts).unwrap();
        assert!(r.missing.is_empty());
        assert!(r.warnings().is_empty());
        assert!(r.has_cookie);
        let params = r.params.as_ref().unwrap();
        assert_eq!(params["keyword"], "rust");
        assert_eq!(params["device_id"], "7");
        assert_eq!(
            params["base_url"],
            "https://api16-normal-c-useast1a.tiktokv.com/aweme/v1/general/search/single/"
        );
    }

    #[test]
    fn missing_url_keeps_headers() {
        let opts = ImportOptions {
            required_headers: vec!["cookie".to_string()],
            capture_params: true,
        };
        let r = import_capture(CaptureFormat::Curl, "curl -H 'Cookie: a=1'", &opts).unwrap();
        assert_eq!(r.headers["cookie"], "a=1");
        assert!(r.has_cookie);
        assert!(r.params.is_none());
        assert!(r.missing.is_empty());
        assert_eq!(
            r.warnings(),
            vec![format!("URL parameters not captured: {}", ParseError::NoUrlFound)]
        );
        assert!(r.form_fields().unwrap().get("params").is_none());
    }

    #[test]
    fn params_ignored_for_other_formats() {
        let opts = ImportOptions {
            required_headers: Vec::new(),
            capture_params: true,
        };
        let r = import_capture(CaptureFormat::HeaderLines, "Cookie: a=1", &opts).unwrap();
        assert!(r.params.is_none());
    }

    #[test]
    fn missing_fields_are_warnings() {
        let cfg = CredpasteConfig::default();
        let opts = ImportOptions::for_platform(&cfg, Platform::Twitter);
        let r = import_capture(CaptureFormat::HeaderLines, "Cookie: ct0=1\nAccept: */*", &opts).unwrap();
        assert_eq!(r.missing, vec!["authorization", "x-csrf-token"]);
        assert_eq!(
            r.warnings(),
            vec!["missing expected fields: authorization, x-csrf-token".to_string()]
        );
    }

    #[test]
    fn cookie_only_options() {
        let r = import_capture(CaptureFormat::Curl, "curl 'u' -H 'Accept: */*'", &ImportOptions::cookie_only())
            .unwrap();
        assert_eq!(r.missing, vec!["cookie"]);
        assert!(!r.has_cookie);
        assert!(r.params.is_none());
    }

    #[test]
    fn fetch_errors_propagate() {
        let err = import_capture(CaptureFormat::Fetch, "nope", &ImportOptions::default()).unwrap_err();
        assert!(matches!(err, ParseError::NoFetchArgs));
    }

    #[test]
    fn form_fields_shape() {
        let cfg = CredpasteConfig::default();
        let opts = ImportOptions::for_platform(&cfg, Platform::Tiktok);
        let r = import_capture(CaptureFormat::Curl, TIKTOK_CURL, &opts).unwrap();
        let fields = r.form_fields().unwrap();
        assert_eq!(fields["headers"]["x-ladon"], "l");
        assert_eq!(fields["params"]["keyword"], "rust");
        assert!(fields.get("hasCookie").is_none());

        let r = import_capture(CaptureFormat::HeaderLines, "A: 1", &ImportOptions::default()).unwrap();
        assert!(r.form_fields().unwrap().get("params").is_none());
    }

    #[test]
    fn capture_format_names() {
        assert_eq!("curl".parse::<CaptureFormat>().unwrap(), CaptureFormat::Curl);
        assert_eq!("Firefox".parse::<CaptureFormat>().unwrap(), CaptureFormat::HeaderLines);
        assert_eq!("fetch".parse::<CaptureFormat>().unwrap(), CaptureFormat::Fetch);
        assert!("har".parse::<CaptureFormat>().is_err());
        assert_eq!(CaptureFormat::HeaderLines.to_string(), "headers");
    }
}
