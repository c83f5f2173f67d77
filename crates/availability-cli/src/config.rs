//! TOML configuration for the `availability` CLI.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable consulted when `--config` is not given.
pub const CONFIG_ENV: &str = "AVAILABILITY_CONFIG";

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JSON array of availability entries.
    pub entries_path: Option<PathBuf>,
    /// JSON array of bookings.
    pub bookings_path: Option<PathBuf>,
    /// `tracing-subscriber` filter directive, e.g. `"availability_engine=debug"`.
    pub log_filter: Option<String>,
}

impl Config {
    /// Load from `path`, falling back to `$AVAILABILITY_CONFIG`, then to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => std::env::var_os(CONFIG_ENV).map(PathBuf::from),
        };

        match path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                Self::parse(&content)
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Command-line values take precedence over file values.
    pub fn with_overrides(mut self, entries: Option<PathBuf>, bookings: Option<PathBuf>) -> Self {
        if entries.is_some() {
            self.entries_path = entries;
        }
        if bookings.is_some() {
            self.bookings_path = bookings;
        }
        self
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
