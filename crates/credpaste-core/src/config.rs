use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::headers::fold_name;
use crate::platform::Platform;

/// How parse results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty JSON, ready to paste into the account form.
    #[default]
    Json,
    /// `name: value` lines.
    Lines,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "lines" => Ok(OutputFormat::Lines),
            other => Err(format!("unknown output format '{other}' (expected json or lines)")),
        }
    }
}

/// Per-platform overrides (optional section in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Header names reported as missing when absent. Replaces the built-in list.
    #[serde(default)]
    pub required_headers: Option<Vec<String>>,
    /// Also extract URL query parameters from curl commands.
    #[serde(default)]
    pub capture_params: Option<bool>,
}

impl PlatformConfig {
    fn defaults_for(platform: Platform) -> Self {
        Self {
            required_headers: Some(
                platform
                    .default_required_headers()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            capture_params: Some(platform.default_captures_params()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformsConfig {
    #[serde(default)]
    pub twitter: Option<PlatformConfig>,
    #[serde(default)]
    pub instagram: Option<PlatformConfig>,
    #[serde(default)]
    pub tiktok: Option<PlatformConfig>,
}

impl PlatformsConfig {
    pub fn get(&self, platform: Platform) -> Option<&PlatformConfig> {
        match platform {
            Platform::Twitter => self.twitter.as_ref(),
            Platform::Instagram => self.instagram.as_ref(),
            Platform::Tiktok => self.tiktok.as_ref(),
        }
    }
}

/// Global configuration loaded from `~/.config/credpaste/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredpasteConfig {
    /// Platform used when the command line does not name one.
    #[serde(default)]
    pub default_platform: Option<Platform>,
    /// Output format: "json" (default) or "lines".
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default)]
    pub platforms: PlatformsConfig,
}

impl Default for CredpasteConfig {
    fn default() -> Self {
        Self {
            default_platform: None,
            output: OutputFormat::Json,
            platforms: PlatformsConfig {
                twitter: Some(PlatformConfig::defaults_for(Platform::Twitter)),
                instagram: Some(PlatformConfig::defaults_for(Platform::Instagram)),
                tiktok: Some(PlatformConfig::defaults_for(Platform::Tiktok)),
            },
        }
    }
}

impl CredpasteConfig {
    /// Required header names for `platform`, folded like parsed header names.
    pub fn required_headers(&self, platform: Platform) -> Vec<String> {
        match self
            .platforms
            .get(platform)
            .and_then(|p| p.required_headers.as_ref())
        {
            Some(names) => names
                .iter()
                .map(|n| fold_name(n))
                .filter(|n| !n.is_empty())
                .collect(),
            None => platform
                .default_required_headers()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn captures_params(&self, platform: Platform) -> bool {
        self.platforms
            .get(platform)
            .and_then(|p| p.capture_params)
            .unwrap_or_else(|| platform.default_captures_params())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("credpaste")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CredpasteConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CredpasteConfig::default();
        let toml = to_toml(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Effective configuration as TOML text.
pub fn to_toml(cfg: &CredpasteConfig) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<CredpasteConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let cfg: CredpasteConfig = toml::from_str(&data)
        .with_context(|| format!("parse config file: {}", path.display()))?;
    Ok(cfg)
}
