//! Configuration system for the mission simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline policy constants.
//! 2. **Structures:** Hierarchical config for simulation policy and logging.
//! 3. **Loading:** JSON deserialization for the CLI's `--config` flag.
//!
//! Configuration is supplied as JSON or via `Config::default()`; every field
//! is optional, so partial config files parse.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{Result, SimulationError};

/// Default configuration constants for the simulator.
///
/// These values define the baseline policy when not explicitly overridden in
/// a JSON configuration file.
mod defaults {
    /// Whether the plateau boundary is re-checked after every forward move.
    ///
    /// Construction always validates starting positions; this constant only
    /// governs re-checking during deployment. A rover silently walking off
    /// the plateau is a correctness gap, so re-checking is on by default.
    pub const STRICT_BOUNDS: bool = true;

    /// Log filter directive applied when `RUST_LOG` is unset.
    pub const LOG_LEVEL: &str = "info";
}

/// Simulation policy configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Re-check the plateau boundary after every forward move during
    /// deployment. Disabling restores construction-only checking: rovers may
    /// then leave the plateau and finish with out-of-range coordinates.
    pub strict_bounds: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            strict_bounds: defaults::STRICT_BOUNDS,
        }
    }
}

/// Logging configuration consumed by the CLI when installing its subscriber.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive (e.g. `info`, `debug`, `roversim_core=trace`).
    /// An explicit `RUST_LOG` environment variable takes precedence.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_owned(),
        }
    }
}

/// Root configuration type; use `Config::default()` or deserialize from JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulation policy.
    pub simulation: SimulationConfig,
    /// Logging policy.
    pub log: LogConfig,
}

impl Config {
    /// Loads configuration from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON config file.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or [`SimulationError::InvalidInput`] if the
    /// file is unreadable or malformed.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            SimulationError::invalid_input(format!(
                "cannot read config file '{}': {e}",
                path.display()
            ))
        })?;
        serde_json::from_str(&text).map_err(|e| {
            SimulationError::invalid_input(format!(
                "malformed config file '{}': {e}",
                path.display()
            ))
        })
    }
}
