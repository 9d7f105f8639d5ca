//! `credpaste config` – show where the config lives and what is in effect.

use anyhow::Result;
use credpaste_core::config::{self, CredpasteConfig};
use std::path::Path;

pub fn run_config(cfg: &CredpasteConfig, explicit: Option<&Path>) -> Result<()> {
    match explicit {
        Some(path) => println!("# config: {}", path.display()),
        None => println!("# config: {}", config::config_path()?.display()),
    }
    print!("{}", config::to_toml(cfg)?);
    Ok(())
}
