//! The analysis model: recorded series, Euler prediction, errors and range.
//!
//! Built once, then read by the GUI and the exporters without recomputation.

use crate::config::AnalyzerConfig;
use crate::data::{DataLoader, LoadReport, LoaderError, Series, TimeFormat};
use crate::model::{euler_predictions, CoolingModel};
use crate::stats::{AxisRange, ErrorCalculator, ErrorSummary};
use log::info;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No data rows loaded")]
    NoData,
    #[error(transparent)]
    Load(#[from] LoaderError),
}

/// One index of every derived series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisRow {
    pub index: usize,
    pub time: f64,
    pub actual: f64,
    pub predicted: f64,
    pub error: f64,
}

#[derive(Debug, Clone)]
pub struct ThermalAnalysis {
    series: Series,
    model: CoolingModel,
    predictions: Vec<f64>,
    errors: Vec<f64>,
    total_error: f64,
    range: AxisRange,
    summary: ErrorSummary,
}

impl ThermalAnalysis {
    /// Run the stepper and aggregations over `series`.
    pub fn new(series: Series, model: &CoolingModel, padding: f64) -> Result<Self, AnalysisError> {
        if series.is_empty() {
            return Err(AnalysisError::NoData);
        }

        let actual = series.temperatures();
        let mut predictions = euler_predictions(&series, model);
        if predictions.is_empty() {
            // Single sample: only the initial condition exists.
            predictions = actual.clone();
        }

        let errors = ErrorCalculator::percent_errors(&actual, &predictions);
        let total_error = ErrorCalculator::total_error(&errors);
        let range = ErrorCalculator::axis_range(&series.times(), &actual, &predictions, padding)
            .ok_or(AnalysisError::NoData)?;
        let summary = ErrorCalculator::summarize(&errors);

        Ok(Self {
            series,
            model: *model,
            predictions,
            errors,
            total_error,
            range,
            summary,
        })
    }

    /// Analyze the rows of an already loaded file.
    pub fn from_report(report: LoadReport, config: &AnalyzerConfig) -> Result<Self, AnalysisError> {
        Self::new(report.series, &config.cooling, config.axis_padding)
    }

    /// Load the configured CSV and analyze it.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, AnalysisError> {
        let report =
            DataLoader::new(TimeFormat::Clock, config.max_rows).load_csv(&config.csv_path)?;
        let analysis = Self::from_report(report, config)?;
        info!(
            "Analyzed {} points, total error {:.4} %",
            analysis.len(),
            analysis.total_error()
        );
        Ok(analysis)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn model(&self) -> &CoolingModel {
        &self.model
    }

    pub fn time(&self, index: usize) -> Option<f64> {
        self.series.get(index).map(|s| s.time)
    }

    pub fn temperature(&self, index: usize) -> Option<f64> {
        self.series.get(index).map(|s| s.temperature)
    }

    pub fn prediction(&self, index: usize) -> Option<f64> {
        self.predictions.get(index).copied()
    }

    pub fn error(&self, index: usize) -> Option<f64> {
        self.errors.get(index).copied()
    }

    pub fn predictions(&self) -> &[f64] {
        &self.predictions
    }

    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// Sum of per-point percent errors (not a mean).
    pub fn total_error(&self) -> f64 {
        self.total_error
    }

    pub fn range(&self) -> &AxisRange {
        &self.range
    }

    pub fn summary(&self) -> &ErrorSummary {
        &self.summary
    }

    pub fn rows(&self) -> impl Iterator<Item = AnalysisRow> + '_ {
        self.series
            .iter()
            .zip(&self.predictions)
            .zip(&self.errors)
            .enumerate()
            .map(|(index, ((sample, &predicted), &error))| AnalysisRow {
                index,
                time: sample.time,
                actual: sample.temperature,
                predicted,
                error,
            })
    }

    /// Rows whose time, rounded to whole minutes, is a multiple of `interval_minutes`.
    pub fn table_rows(&self, interval_minutes: u32) -> Vec<AnalysisRow> {
        self.rows()
            .filter(|row| {
                interval_minutes == 0
                    || ((row.time * 60.0).round() as i64).rem_euclid(interval_minutes as i64) == 0
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Sample;
    use crate::stats::AXIS_PADDING;

    fn analysis(points: &[(f64, f64)]) -> ThermalAnalysis {
        let series: Series = points.iter().map(|&(t, y)| Sample::new(t, y)).collect();
        ThermalAnalysis::new(series, &CoolingModel::default(), AXIS_PADDING).unwrap()
    }

    #[test]
    fn empty_series_is_rejected() {
        let result =
            ThermalAnalysis::new(Series::default(), &CoolingModel::default(), AXIS_PADDING);
        assert!(matches!(result, Err(AnalysisError::NoData)));
    }

    #[test]
    fn single_sample_keeps_aligned_lengths() {
        let a = analysis(&[(0.0, 30.0)]);
        assert_eq!(a.predictions(), &[30.0]);
        assert_eq!(a.errors(), &[0.0]);
        assert_eq!(a.total_error(), 0.0);
        assert_eq!(a.range().x_min, a.range().x_max);
    }

    #[test]
    fn derived_series_share_length() {
        let a = analysis(&[(0.0, 30.0), (0.5, 29.0), (1.0, 28.0), (1.5, 27.5)]);
        assert_eq!(a.predictions().len(), a.len());
        assert_eq!(a.errors().len(), a.len());
        assert_eq!(a.rows().count(), a.len());
        assert_eq!(a.prediction(0), a.temperature(0));
        assert_eq!(a.error(4), None);
    }

    #[test]
    fn table_rows_keep_ten_minute_marks() {
        let points: Vec<(f64, f64)> = (0..=25)
            .map(|m| (m as f64 / 60.0, 40.0 - m as f64 * 0.1))
            .collect();
        let a = analysis(&points);

        let rows = a.table_rows(10);
        let minutes: Vec<i64> = rows.iter().map(|r| (r.time * 60.0).round() as i64).collect();
        assert_eq!(minutes, vec![0, 10, 20]);
        assert_eq!(rows[1].index, 10);
        assert_eq!(a.table_rows(0).len(), a.len());
    }
}
