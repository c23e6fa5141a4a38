//! Client configuration.
//!
//! Loaded from TOML or from the environment:
//!
//! ```toml
//! mode = "mock"             # "live" (default) or "mock"
//! resource_dir = "fixtures" # required when mode = "mock"
//! delay_ms = 0              # artificial mock latency
//! ```
//!
//! ## Environment Variables
//!
//! - `FETCH_MODE`: `live` or `mock`
//!
//! The mode is matched case-insensitively in both sources.
//! - `FETCH_MOCK_DIR`: mock resource directory
//! - `FETCH_MOCK_DELAY_MS`: mock latency in milliseconds

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable selecting the transport.
pub const ENV_MODE: &str = "FETCH_MODE";
/// Environment variable for the mock resource directory.
pub const ENV_MOCK_DIR: &str = "FETCH_MOCK_DIR";
/// Environment variable for the mock delay in milliseconds.
pub const ENV_MOCK_DELAY_MS: &str = "FETCH_MOCK_DELAY_MS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("mock mode requires a resource directory")]
    MissingResourceDir,

    #[error("unknown transport mode: {0}")]
    InvalidMode(String),

    #[error("invalid mock delay: {0}")]
    InvalidDelay(String),
}

/// Which transport a `Client` should use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Mode {
    #[default]
    Live,
    Mock,
}

/// Case-insensitive, shared by TOML and `FETCH_MODE`.
impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "mock" => Ok(Self::Mock),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for Mode {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub mode: Mode,
    pub resource_dir: Option<PathBuf>,
    pub delay_ms: u64,
}

impl ClientConfig {
    pub fn live() -> Self {
        Self::default()
    }

    pub fn mock(resource_dir: impl Into<PathBuf>) -> Self {
        Self {
            mode: Mode::Mock,
            resource_dir: Some(resource_dir.into()),
            delay_ms: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Build a config from `FETCH_*` environment variables, defaulting to
    /// live mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(mode) = lookup(ENV_MODE) {
            config.mode = mode.parse()?;
        }
        config.resource_dir = lookup(ENV_MOCK_DIR).map(PathBuf::from);
        if let Some(delay) = lookup(ENV_MOCK_DELAY_MS) {
            config.delay_ms = delay
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidDelay(delay))?;
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.mode == Mode::Mock && self.resource_dir.is_none() {
            return Err(ConfigError::MissingResourceDir);
        }
        Ok(())
    }
}
