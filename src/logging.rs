//! env_logger setup for the terminal binary.
//!
//! The game owns the screen in raw mode, so log output only goes to a file.

use std::fs::File;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn,blockfall=info,blockfall_core=info";

/// Route `log` records to `path`. Without a path logging stays off.
pub fn init(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("open log file {}", path))?;
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;
    log::info!("logging to {}", path);
    Ok(())
}
