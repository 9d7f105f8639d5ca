//! CLI for importing account headers from pasted request captures.

mod commands;
mod input;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use credpaste_core::config::{self, CredpasteConfig, OutputFormat};
use credpaste_core::import::CaptureFormat;
use credpaste_core::platform::Platform;
use std::path::PathBuf;

use commands::{run_capture, run_config, run_params};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "credpaste")]
#[command(
    about = "Extract account headers from pasted curl, fetch or raw header captures",
    long_about = None
)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/credpaste/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Input and output options shared by the header commands.
#[derive(Debug, Clone, Args)]
pub struct CaptureArgs {
    /// File with the pasted text; `-` or omitted reads stdin.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Platform whose expected fields are checked (twitter, instagram, tiktok).
    #[arg(long, short)]
    pub platform: Option<Platform>,

    /// Output format: json or lines (defaults to the configured one).
    #[arg(long, short)]
    pub format: Option<OutputFormat>,

    /// Also extract URL parameters (curl input only).
    #[arg(long)]
    pub params: bool,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a curl command copied with single-quoted arguments.
    Curl {
        #[command(flatten)]
        capture: CaptureArgs,
    },

    /// Parse raw `Name: value` header lines (e.g. Firefox "Raw" request headers).
    Headers {
        #[command(flatten)]
        capture: CaptureArgs,
    },

    /// Parse a `fetch(url, { headers: ... })` snippet.
    Fetch {
        #[command(flatten)]
        capture: CaptureArgs,
    },

    /// Print the URL and decoded query parameters of a curl command.
    Params {
        /// File with the curl command; `-` or omitted reads stdin.
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Show the config file location and the effective configuration.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(&cli)?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Curl { capture } => run_capture(&cfg, CaptureFormat::Curl, &capture)?,
            CliCommand::Headers { capture } => {
                run_capture(&cfg, CaptureFormat::HeaderLines, &capture)?
            }
            CliCommand::Fetch { capture } => run_capture(&cfg, CaptureFormat::Fetch, &capture)?,
            CliCommand::Params { input } => run_params(input.as_deref())?,
            CliCommand::Config => run_config(&cfg, cli.config.as_deref())?,
        }

        Ok(())
    }
}

fn load_config(cli: &Cli) -> Result<CredpasteConfig> {
    match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load_or_init(),
    }
}

#[cfg(test)]
mod tests;
