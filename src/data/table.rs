//! Result Table Module
//! Converts an analysis into a Polars DataFrame and writes it as CSV.

use crate::analysis::{AnalysisRow, ThermalAnalysis};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("Failed to write table: {0}")]
    Io(#[from] std::io::Error),
}

pub const INDEX_COL: &str = "index";
pub const TIME_COL: &str = "time_hours";
pub const ACTUAL_COL: &str = "actual_c";
pub const EULER_COL: &str = "euler_c";
pub const ERROR_COL: &str = "error_pct";

/// Tabular view of analysis rows.
pub struct ResultTable;

impl ResultTable {
    /// Build a DataFrame from the given rows. `index` is 1-based.
    pub fn from_rows(rows: &[AnalysisRow]) -> Result<DataFrame, TableError> {
        let index: Vec<u32> = rows.iter().map(|r| r.index as u32 + 1).collect();
        let time: Vec<f64> = rows.iter().map(|r| r.time).collect();
        let actual: Vec<f64> = rows.iter().map(|r| r.actual).collect();
        let predicted: Vec<f64> = rows.iter().map(|r| r.predicted).collect();
        let error: Vec<f64> = rows.iter().map(|r| r.error).collect();

        let df = DataFrame::new(vec![
            Column::new(INDEX_COL.into(), index),
            Column::new(TIME_COL.into(), time),
            Column::new(ACTUAL_COL.into(), actual),
            Column::new(EULER_COL.into(), predicted),
            Column::new(ERROR_COL.into(), error),
        ])?;
        Ok(df)
    }

    /// Every row of the analysis.
    pub fn from_analysis(analysis: &ThermalAnalysis) -> Result<DataFrame, TableError> {
        let rows: Vec<AnalysisRow> = analysis.rows().collect();
        Self::from_rows(&rows)
    }

    /// Write a DataFrame as CSV with a header line.
    pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<(), TableError> {
        let mut file = File::create(path)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(df)?;
        Ok(())
    }

    /// Convenience: export all analysis rows to `path`.
    pub fn export(analysis: &ThermalAnalysis, path: &Path) -> Result<usize, TableError> {
        let mut df = Self::from_analysis(analysis)?;
        Self::write_csv(&mut df, path)?;
        Ok(df.height())
    }
}
