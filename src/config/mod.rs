//! Configuration loading and merging
//!
//! Handles loading from config files, environment variables, and CLI arguments
//! with proper precedence (CLI > Env > File > Defaults).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::{load_config, load_file_config, ENV_PREFIX};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the persisted knowledge base.
    pub data_dir: PathBuf,
    /// Directory exports are written to.
    pub output_dir: PathBuf,
    /// Omit the time-derived part of export file names.
    pub no_timestamp: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { data_dir: default_data_dir(), output_dir: PathBuf::from("."), no_timestamp: false }
    }
}

fn default_data_dir() -> PathBuf {
    data_root_dir()
        .map(|root| root.join("solution-kb"))
        .unwrap_or_else(|| PathBuf::from(".solution-kb"))
}

fn data_root_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(PathBuf::from)
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return Some(PathBuf::from(xdg));
        }
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("share"))
    }
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub no_timestamp: bool,
}

impl Config {
    pub fn merge_cli(mut self, overrides: CliOverrides) -> Self {
        if let Some(dir) = overrides.data_dir {
            self.data_dir = dir;
        }
        if let Some(dir) = overrides.output_dir {
            self.output_dir = dir;
        }
        self.no_timestamp |= overrides.no_timestamp;
        self
    }
}
