//! Configuration management
//!
//! Optional TOML file controlling how malformed input is handled and how the
//! verdict is rendered. Resolution order: explicit path, `ARMCHECK_CONFIG`,
//! then `<config dir>/armcheck/config.toml` (XDG standard on Linux). A missing
//! file yields the defaults.
//!
//! ```toml
//! [input]
//! on_parse_error = "error"   # or "zero"
//!
//! [output]
//! format = "human"           # or "json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::output::OutputMode;

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "ARMCHECK_CONFIG";

/// What to do when the input is missing or not an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Report the failure and exit non-zero
    #[default]
    Error,
    /// Treat the input as 0 and continue
    Zero,
}

/// armcheck configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Input handling
    #[serde(default)]
    pub input: InputConfig,
    /// Output rendering
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input handling preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct InputConfig {
    /// Policy for missing or non-numeric input
    #[serde(default)]
    pub on_parse_error: ParsePolicy,
}

/// Output rendering preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Default output mode when `--json` is not given
    #[serde(default)]
    pub format: OutputMode,
}

impl Config {
    /// Default config file path: `<config dir>/armcheck/config.toml`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("armcheck").join("config.toml"))
    }

    /// Resolve which config file to use
    ///
    /// An explicit path wins, then `ARMCHECK_CONFIG`, then [`Self::default_path`].
    #[must_use]
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .or_else(Self::default_path)
    }

    /// Load configuration, falling back to defaults when no file exists
    ///
    /// An explicitly given path must exist; the environment and default
    /// locations are optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = Self::resolve_path(explicit) else {
            debug!("no config directory, using defaults");
            return Ok(Self::default());
        };

        if explicit.is_none() && !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
