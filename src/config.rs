//! Configuration management and validation.
//!
//! Provides the parser options accepted by [`DfqParser`](crate::DfqParser) and the
//! CLI-level configuration that can be loaded from a TOML file.

use std::collections::BTreeSet;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::models::KKey;
use crate::constants::DEFAULT_ENCODING;
use crate::{Error, Result};

/// Shape of a K-key in configuration files, e.g. `K2001` or `KX001`
static KKEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^K[0-9X][0-9A-Z_]{3}$").expect("K-key pattern is a valid regex"));

/// Options controlling parser diagnostics
///
/// Neither option changes what ends up in the model: an unknown K-key or a value
/// that fails conversion is always dropped, the options only decide whether a
/// warning is logged for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Silence unknown K-key and conversion warnings for all keys
    pub suppress_invalid_kkey_logging: bool,

    /// Silence unknown K-key and conversion warnings for these keys only
    pub suppress_invalid_kkey_logging_for: BTreeSet<String>,
}

impl ParserOptions {
    /// Silence warnings for every K-key
    pub fn with_suppressed_logging(mut self) -> Self {
        self.suppress_invalid_kkey_logging = true;
        self
    }

    /// Silence warnings for the given K-keys
    pub fn with_suppressed_logging_for<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suppress_invalid_kkey_logging_for
            .extend(keys.into_iter().map(Into::into));
        self
    }

    /// Whether a diagnostic about `key` should be logged
    pub fn is_invalid_kkey_logging_enabled(&self, key: &KKey) -> bool {
        !self.suppress_invalid_kkey_logging
            && !self.suppress_invalid_kkey_logging_for.contains(key.key())
    }
}

/// Input decoding settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Encoding label understood by `encoding_rs`, e.g. `utf-8` or `windows-1250`
    pub encoding: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

/// Logging settings of the command line tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Global configuration of the `dfq` tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Parser diagnostics
    pub parser: ParserOptions,

    /// Input decoding
    pub input: InputConfig,

    /// Logging
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read configuration file {}", path.display()),
                e,
            )
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the input encoding label
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.input.encoding = encoding.into();
        self
    }

    /// Silence invalid K-key warnings for every key
    pub fn with_suppressed_logging(mut self) -> Self {
        self.parser.suppress_invalid_kkey_logging = true;
        self
    }

    /// Silence invalid K-key warnings for the given keys
    pub fn with_suppressed_logging_for<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parser = self.parser.with_suppressed_logging_for(keys);
        self
    }

    /// Set the default logging level
    pub fn with_logging_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Check the encoding label and the suppressed K-keys
    pub fn validate(&self) -> Result<()> {
        if encoding_rs::Encoding::for_label(self.input.encoding.as_bytes()).is_none() {
            return Err(Error::configuration(format!(
                "Unknown encoding label: {}",
                self.input.encoding
            )));
        }

        for key in &self.parser.suppress_invalid_kkey_logging_for {
            if !is_valid_kkey(key) {
                return Err(Error::configuration(format!(
                    "Invalid K-key in suppress_invalid_kkey_logging_for: {}",
                    key
                )));
            }
        }

        Ok(())
    }
}

/// Whether `key` looks like a K-key
pub fn is_valid_kkey(key: &str) -> bool {
    KKEY_PATTERN.is_match(key)
}
