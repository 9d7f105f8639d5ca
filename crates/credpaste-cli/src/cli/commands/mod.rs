//! CLI command handlers.

mod capture;
mod config;
mod params;

pub use capture::run_capture;
pub use config::run_config;
pub use params::run_params;

#[cfg(test)]
pub(crate) use capture::render;
