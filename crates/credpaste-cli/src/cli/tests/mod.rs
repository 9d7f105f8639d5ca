//! CLI parse and rendering tests.

use super::{CaptureArgs, Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

pub(super) fn capture_of(cli: Cli) -> CaptureArgs {
    match cli.command {
        CliCommand::Curl { capture }
        | CliCommand::Headers { capture }
        | CliCommand::Fetch { capture } => capture,
        other => panic!("expected a capture command, got {other:?}"),
    }
}

mod capture;
