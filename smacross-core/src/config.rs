//! Run configuration.
//!
//! Defaults reproduce the historical invocation: read `ksa_us_d.csv` from the
//! working directory and print text lines. A TOML file may override either
//! setting:
//!
//! ```toml
//! input = "data/spy.csv"
//! format = "json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::report::OutputFormat;

/// Input file used when none is given.
pub const DEFAULT_INPUT: &str = "ksa_us_d.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// CSV file to read.
    pub input: PathBuf,
    /// Report line format.
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            format: OutputFormat::default(),
        }
    }
}

impl RunConfig {
    /// Load from a TOML file; absent keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        self
    }

    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
