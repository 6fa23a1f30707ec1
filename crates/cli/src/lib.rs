// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod presentation;

use crate::args::Args;
use crate::config::AppConfig;
use crate::error::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan the working directory and print the report to stdout.
///
/// # Errors
///
/// Fails when the working directory cannot be resolved, the scan cannot
/// start, or stdout cannot be written.
pub fn run(args: Args) -> Result<()> {
    let config = AppConfig::try_from(args)?;
    tracing::debug!(
        root = %config.engine.walk.root.display(),
        color = config.style.color,
        "resolved configuration"
    );
    let result = linetally_engine::run(&config.engine)?;
    presentation::print_results(&result.summary, config.style)?;
    Ok(())
}
