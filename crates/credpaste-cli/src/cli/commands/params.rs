//! `credpaste params` – URL and query parameters of a curl command.

use anyhow::{Context, Result};
use credpaste_core::headers::to_pretty_json;
use credpaste_core::query::parse_curl_url_and_params;
use std::path::Path;

use crate::cli::input::read_input;

pub fn run_params(input: Option<&Path>) -> Result<()> {
    let text = read_input(input)?;
    let parsed = parse_curl_url_and_params(&text).context("curl command could not be parsed")?;
    println!("{}", to_pretty_json(&parsed)?);
    Ok(())
}
