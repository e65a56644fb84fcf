//! Configuration
//!
//! Optional settings from `~/.config/winplace/config.toml`. The file is only
//! read, never created: without it the built-in defaults apply. A file named
//! with `--config` must exist. Command line flags override anything set here.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::place::Settle;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `tracing` filter directives, e.g. `"winplace=debug"`. `RUST_LOG`
    /// takes precedence.
    pub log_filter: Option<String>,
    pub settle: SettleConfig,
}

impl Config {
    /// Load from `path`, or from the default location when `None`. Only a
    /// missing default file yields the defaults. Called before logging is
    /// set up, so this only reports through its result.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Get the path to the config file
    fn config_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("winplace").join("config.toml"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettleMode {
    Fixed,
    Poll,
}

/// Waiting for the window manager after un-maximizing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SettleConfig {
    pub mode: SettleMode,
    /// Sleep for `fixed` mode
    pub delay_ms: u64,
    /// Time between state checks in `poll` mode
    pub poll_interval_ms: u64,
    /// Give up polling after this long
    pub timeout_ms: u64,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            mode: SettleMode::Fixed,
            delay_ms: 50,
            poll_interval_ms: 10,
            timeout_ms: 500,
        }
    }
}

impl SettleConfig {
    pub fn settle(&self) -> Settle {
        match self.mode {
            SettleMode::Fixed => Settle::Fixed(Duration::from_millis(self.delay_ms)),
            SettleMode::Poll => Settle::Poll {
                interval: Duration::from_millis(self.poll_interval_ms),
                timeout: Duration::from_millis(self.timeout_ms),
            },
        }
    }
}
