//! Library error types
//!
//! The binary wraps these in `anyhow` with context; the library keeps them
//! typed so callers can match on the failure.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the input integer
#[derive(Debug, Error)]
pub enum InputError {
    /// Input ended before any token was read
    #[error("no input: expected a base-10 integer")]
    Empty,

    /// The first token is not a base-10 integer that fits in 64 bits
    #[error("invalid integer {token:?}")]
    Invalid {
        /// The offending token
        token: String,
    },

    /// The underlying reader failed
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// Whether this is a parse failure rather than an I/O failure
    #[must_use]
    pub const fn is_parse_failure(&self) -> bool {
        matches!(self, Self::Empty | Self::Invalid { .. })
    }
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file {path}")]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for the expected schema
    #[error("failed to parse config file {path}")]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}
