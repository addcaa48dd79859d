#![forbid(unsafe_code)]

//! File-backed log output.
//!
//! The alternate screen owns stdout, so logs go to a file. `PATLOCK_LOG`
//! takes an `EnvFilter` directive; the default is `debug`.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use patlock::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PATLOCK_LOG";

const DEFAULT_FILTER: &str = "debug";

/// Resolve the filter from `PATLOCK_LOG`, falling back to `debug`.
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global `fmt` subscriber writing to `path`.
pub fn init(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(io::Error::other)?;
    Ok(())
}
