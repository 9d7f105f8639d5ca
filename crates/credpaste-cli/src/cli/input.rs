//! Reading pasted text from a file or stdin.

use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::Path;

/// Reads the whole input. `None` or `-` means stdin.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("read input file: {}", p.display())),
        _ => read_from(io::stdin().lock()).context("read stdin"),
    }
}

pub(crate) fn read_from(mut reader: impl Read) -> io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}
