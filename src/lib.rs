//! Thermal Analysis - cooling curve vs forward Euler prediction
//!
//! Reads `time,temperature` CSV files, predicts the curve with an explicit
//! Euler step of `dT/dt = -k (T - T_ambient)`, and measures the per-point
//! percent error against the recording.
//!
//! ```rust,ignore
//! use thermal_analysis::{AnalyzerConfig, ThermalAnalysis};
//!
//! let analysis = ThermalAnalysis::from_config(&AnalyzerConfig::default())?;
//! println!("total error: {:.4} %", analysis.total_error());
//! ```

pub mod analysis;
pub mod charts;
pub mod config;
pub mod data;
pub mod model;
pub mod stats;

pub use analysis::{AnalysisError, AnalysisRow, ThermalAnalysis};
pub use config::{AnalyzerConfig, ConfigError};
pub use data::{DataLoader, LoadReport, Sample, Series, TimeFormat};
pub use model::CoolingModel;
