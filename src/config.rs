//! Search configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::loader::LineFormat;
use crate::error::{Result, SearchError};

/// Data file used when no path is configured.
pub const DEFAULT_FLIGHT_DATA_FILE: &str = "flightData.csv";

/// What a search does when a row cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Stop at the first bad row and return the error. Matches found earlier
    /// in the same call are dropped and nothing reaches the flight log.
    #[default]
    Abort,
    /// Log the row, record it in the outcome, and keep scanning.
    Skip,
}

/// Settings for a [`FlightSearch`](crate::FlightSearch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub data_path: PathBuf,
    pub format: LineFormat,
    pub on_malformed: MalformedPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_FLIGHT_DATA_FILE),
            format: LineFormat::default(),
            on_malformed: MalformedPolicy::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    pub fn with_format(mut self, format: LineFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.on_malformed = policy;
        self
    }

    /// Load a config from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| SearchError::from_io(path, e))?;
        serde_json::from_str(&text).map_err(|source| SearchError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
