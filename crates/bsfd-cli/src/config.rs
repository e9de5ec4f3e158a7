//! Solver settings file.
//!
//! ```toml
//! inversion_tolerance = 1e-10
//! extraction = "interpolated"
//! ```

use anyhow::{Context, Result};
use bsfd_methods::SolverSettings;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Parse settings from TOML text.
pub fn parse(content: &str) -> Result<SolverSettings> {
    let settings: SolverSettings =
        toml::from_str(content).context("failed to parse settings TOML")?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from `path`; a missing file yields the defaults.
pub fn load(path: Option<&Path>) -> Result<SolverSettings> {
    let Some(path) = path else {
        return Ok(SolverSettings::default());
    };
    if !path.exists() {
        warn!("settings file {} not found, using defaults", path.display());
        return Ok(SolverSettings::default());
    }
    info!("loading settings from {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    parse(&content).with_context(|| format!("invalid settings file {}", path.display()))
}
