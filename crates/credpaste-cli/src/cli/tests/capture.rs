//! Tests for curl, headers and fetch argument parsing.

use super::{capture_of, parse};
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use credpaste_core::config::OutputFormat;
use credpaste_core::platform::Platform;
use std::path::Path;

#[test]
fn cli_parse_curl_defaults() {
    let cli = parse(&["credpaste", "curl"]);
    assert!(cli.config.is_none());
    let c = capture_of(cli);
    assert!(c.input.is_none());
    assert!(c.platform.is_none());
    assert!(c.format.is_none());
    assert!(!c.params);
}

#[test]
fn cli_parse_curl_all_options() {
    let c = capture_of(parse(&[
        "credpaste",
        "curl",
        "capture.txt",
        "--platform",
        "tiktok",
        "--format",
        "lines",
        "--params",
    ]));
    assert_eq!(c.input.as_deref(), Some(Path::new("capture.txt")));
    assert_eq!(c.platform, Some(Platform::Tiktok));
    assert_eq!(c.format, Some(OutputFormat::Lines));
    assert!(c.params);
}

#[test]
fn cli_parse_headers_short_flags() {
    let cli = parse(&["credpaste", "headers", "-", "-p", "x", "-f", "json"]);
    assert!(matches!(cli.command, CliCommand::Headers { .. }));
    let c = capture_of(cli);
    assert_eq!(c.input.as_deref(), Some(Path::new("-")));
    assert_eq!(c.platform, Some(Platform::Twitter));
    assert_eq!(c.format, Some(OutputFormat::Json));
}

#[test]
fn cli_parse_fetch_with_config() {
    let cli = parse(&["credpaste", "fetch", "--config", "/tmp/c.toml", "snippet.js"]);
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/c.toml")));
    assert!(matches!(cli.command, CliCommand::Fetch { .. }));
    let c = capture_of(cli);
    assert_eq!(c.input.as_deref(), Some(Path::new("snippet.js")));
}

#[test]
fn cli_rejects_unknown_platform() {
    assert!(Cli::try_parse_from(["credpaste", "curl", "--platform", "myspace"]).is_err());
}

#[test]
fn cli_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["credpaste", "headers", "--format", "yaml"]).is_err());
}
