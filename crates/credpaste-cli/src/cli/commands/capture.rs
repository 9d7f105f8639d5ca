//! `credpaste curl|headers|fetch` – parse a capture into account form fields.

use anyhow::{Context, Result};
use credpaste_core::config::{CredpasteConfig, OutputFormat};
use credpaste_core::headers::{to_header_lines, to_pretty_json};
use credpaste_core::import::{import_capture, AccountImport, CaptureFormat, ImportOptions};

use crate::cli::input::read_input;
use crate::cli::CaptureArgs;

pub fn run_capture(cfg: &CredpasteConfig, format: CaptureFormat, args: &CaptureArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;

    let platform = args.platform.or(cfg.default_platform);
    let mut options = match platform {
        Some(p) => ImportOptions::for_platform(cfg, p),
        None => ImportOptions::cookie_only(),
    };
    if args.params {
        options.capture_params = true;
    }
    tracing::debug!(%format, ?platform, ?options, "importing capture");

    let import = import_capture(format, &text, &options)
        .with_context(|| format!("{format} capture could not be parsed"))?;

    let output = args.format.unwrap_or(cfg.output);
    if output == OutputFormat::Lines && import.params.is_some() {
        tracing::info!("params are only printed in json output");
    }
    print!("{}", render(&import, output)?);

    for warning in import.warnings() {
        eprintln!("warning: {warning}");
    }
    Ok(())
}

/// Text printed to stdout for one import.
pub(crate) fn render(import: &AccountImport, output: OutputFormat) -> Result<String> {
    Ok(match output {
        OutputFormat::Json => to_pretty_json(&import.form_fields()?)? + "\n",
        OutputFormat::Lines => to_header_lines(&import.headers),
    })
}
