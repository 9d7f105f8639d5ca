//! Platforms whose account credentials are imported, and the header fields
//! each one needs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::headers::HeaderMap;

/// Social platform an account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Instagram,
    Tiktok,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Twitter, Platform::Instagram, Platform::Tiktok];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
        }
    }

    /// Header names the backend needs for this platform's requests.
    pub fn default_required_headers(self) -> &'static [&'static str] {
        match self {
            Platform::Twitter => &["cookie", "authorization", "x-csrf-token"],
            Platform::Instagram => &["cookie", "x-csrftoken"],
            Platform::Tiktok => &["x-ladon", "x-khronos", "x-argus", "x-gorgon", "cookie"],
        }
    }

    /// True if account records also carry the captured URL parameters.
    pub fn default_captures_params(self) -> bool {
        matches!(self, Platform::Tiktok)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform '{0}' (expected twitter, instagram or tiktok)")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitter" | "x" => Ok(Platform::Twitter),
            "instagram" | "ig" => Ok(Platform::Instagram),
            "tiktok" => Ok(Platform::Tiktok),
            _ => Err(UnknownPlatform(s.to_string())),
        }
    }
}

/// Required header names that are absent or empty in `headers`, in the order
/// given. Names are compared case-insensitively.
pub fn missing_fields<S: AsRef<str>>(headers: &HeaderMap, required: &[S]) -> Vec<String> {
    let mut missing = Vec::new();
    for name in required {
        let name: &str = name.as_ref();
        let present = headers
            .iter()
            .any(|(k, v)| k.eq_ignore_ascii_case(name) && !v.trim().is_empty());
        if !present {
            missing.push(name.to_string());
        }
    }
    missing
}
