//! Analyzer settings, optionally loaded from a JSON file.
//!
//! ```json
//! {
//!   "csv_path": "temperature_data.csv",
//!   "image_path": "circuit_diagram.jpg",
//!   "max_rows": 500,
//!   "cooling": { "k": 0.1, "ambient_c": 25.0 },
//!   "axis_padding": 0.05,
//!   "table_interval_minutes": 10
//! }
//! ```
//!
//! Every field is optional; missing ones take the defaults shown above.

use crate::data::ANALYZER_MAX_ROWS;
use crate::model::CoolingModel;
use crate::stats::AXIS_PADDING;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CSV_FILE: &str = "temperature_data.csv";
pub const DEFAULT_IMAGE_FILE: &str = "circuit_diagram.jpg";
pub const DEFAULT_TABLE_INTERVAL_MINUTES: u32 = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub csv_path: PathBuf,
    pub image_path: PathBuf,
    pub max_rows: usize,
    pub cooling: CoolingModel,
    pub axis_padding: f64,
    /// Data table shows only samples on multiples of this many minutes (0 = all).
    pub table_interval_minutes: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_FILE),
            image_path: PathBuf::from(DEFAULT_IMAGE_FILE),
            max_rows: ANALYZER_MAX_ROWS,
            cooling: CoolingModel::default(),
            axis_padding: AXIS_PADDING,
            table_interval_minutes: DEFAULT_TABLE_INTERVAL_MINUTES,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }
}
