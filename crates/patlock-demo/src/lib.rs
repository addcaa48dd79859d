#![forbid(unsafe_code)]

//! Terminal host for the pattern-lock widget.
//!
//! Mouse reports are mapped from character cells into layout space, fed to a
//! [`patlock::PatternLock`], and the resolved visuals are rasterized back onto
//! the cell grid.

pub mod app;
pub mod canvas;
pub mod cli;
pub mod logging;
pub mod session;

pub use cli::run_from_env;
