// Showcase configuration: tunables for the reports and the sequence demos, plus optional
// data files that replace the built-in samples

use crate::reports::BIG_CITY_THRESHOLD;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub const CONFIG_ENV_VAR: &str = "TRAVEL_STREAMS_CONFIG";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Log filter from `RUST_LOG` style directives, `info` when unset or unparsable.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ParseError(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub big_city_threshold: u32,
    pub iterate_limit: usize,
    pub range_start: i32,
    pub range_end: i32,
    pub states_path: Option<PathBuf>,
    pub packages_path: Option<PathBuf>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            big_city_threshold: BIG_CITY_THRESHOLD,
            iterate_limit: 10,
            range_start: 1,
            range_end: 10,
            states_path: None,
            packages_path: None,
        }
    }
}

impl ShowcaseConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ShowcaseConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading showcase config");
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Reads the file named by `TRAVEL_STREAMS_CONFIG`, or falls back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.range_start > self.range_end {
            return Err(ConfigError::Invalid(format!(
                "range_start {} is after range_end {}",
                self.range_start, self.range_end
            )));
        }
        Ok(())
    }
}
