#![forbid(unsafe_code)]

//! Loading [`LockConfig`] from JSON.
//!
//! Missing fields fall back to their defaults, so `{}` is a valid document.
//! Sizes must be finite and positive.

use std::fs;
use std::path::Path;

use patlock_widgets::LockConfig;

use crate::error::{Error, Result};

/// Parse and validate a JSON configuration document.
pub fn parse_config(json: &str) -> Result<LockConfig> {
    let config: LockConfig = serde_json::from_str(json)?;
    validate(&config)?;
    Ok(config)
}

/// Read, parse and validate a JSON configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<LockConfig> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let config = parse_config(&text)?;
    tracing::debug!(path = %path.display(), "loaded lock configuration");
    Ok(config)
}

/// Check the sizes of a configuration.
pub fn validate(config: &LockConfig) -> Result<()> {
    for (name, value) in [
        ("bounding_size", config.bounding_size),
        ("point_size", config.point_size),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "{name} must be a positive number, got {value}"
            )));
        }
    }
    Ok(())
}
