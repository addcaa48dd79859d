#![forbid(unsafe_code)]

//! Command-line entry point.
//!
//! Resolves the widget configuration from an optional JSON file and flags,
//! installs file logging when asked, and runs the event loop inside a
//! [`TerminalSession`].

use std::path::PathBuf;

use clap::Parser;
use patlock::{LockConfig, Result};

use crate::app::App;
use crate::logging;
use crate::session::TerminalSession;

/// Point diameter, in terminal rows, when neither flag nor file sets one.
pub const DEFAULT_POINT_SIZE: f64 = 3.0;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "patlock-demo",
    about = "Draw the pattern hidden in the hint to unlock",
    version
)]
pub struct Cli {
    /// Seed the target generator for a reproducible session.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Point diameter in terminal rows.
    #[arg(long = "point-size")]
    pub point_size: Option<f64>,

    /// JSON file with colours and sizes.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write logs here. Filter with PATLOCK_LOG.
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Resolve the widget configuration: the file if given, then the flag.
    pub fn lock_config(&self) -> Result<LockConfig> {
        let mut config = match &self.config {
            Some(path) => patlock::load_config(path)?,
            None => LockConfig {
                point_size: DEFAULT_POINT_SIZE,
                ..LockConfig::default()
            },
        };
        if let Some(point_size) = self.point_size {
            config.point_size = point_size;
        }
        patlock::config::validate(&config)?;
        Ok(config)
    }
}

/// Parse the process arguments and run.
pub fn run_from_env() -> Result<()> {
    run(Cli::parse())
}

/// Run one session. Prints a line after the lock opens.
pub fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        logging::init(path)?;
    }
    let config = cli.lock_config()?;
    tracing::info!(seed = ?cli.seed, point_size = config.point_size, "starting demo");

    let unlocked = {
        let session = TerminalSession::new()?;
        let mut app = App::new(config, cli.seed);
        app.run(&session)?
    };

    if unlocked {
        println!("Unlocked.");
    }
    Ok(())
}
