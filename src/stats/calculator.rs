//! Statistics Calculator Module
//! Percent error between recorded and predicted temperatures, and the padded
//! plotting range covering both.

use statrs::statistics::{Data, Median, Statistics};

/// Fraction of each axis span added on both sides of the plot range.
pub const AXIS_PADDING: f64 = 0.05;

/// Plot bounds covering actual and predicted values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisRange {
    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Descriptive statistics of the per-point percent errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorSummary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for ErrorSummary {
    fn default() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            std_dev: f64::NAN,
            median: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
        }
    }
}

pub struct ErrorCalculator;

impl ErrorCalculator {
    /// `|actual - predicted| / |actual| * 100` per index.
    ///
    /// A zero actual value yields an infinite (or NaN) entry; it is not masked.
    pub fn percent_errors(actual: &[f64], predicted: &[f64]) -> Vec<f64> {
        debug_assert_eq!(actual.len(), predicted.len());
        actual
            .iter()
            .zip(predicted)
            .map(|(&a, &p)| (a - p).abs() / a.abs() * 100.0)
            .collect()
    }

    /// Sum of all percent errors. This is a sum, not a mean.
    pub fn total_error(errors: &[f64]) -> f64 {
        errors.iter().sum()
    }

    /// Padded range over `times` and the union of `actual` and `predicted`.
    ///
    /// Returns `None` for empty input. A zero span gets zero padding.
    pub fn axis_range(
        times: &[f64],
        actual: &[f64],
        predicted: &[f64],
        padding: f64,
    ) -> Option<AxisRange> {
        let (&t0, &y0) = (times.first()?, actual.first()?);

        let (x_min, x_max) = times
            .iter()
            .fold((t0, t0), |(lo, hi), &t| (lo.min(t), hi.max(t)));
        let (y_min, y_max) = actual
            .iter()
            .chain(predicted)
            .fold((y0, y0), |(lo, hi), &y| (lo.min(y), hi.max(y)));

        let x_pad = (x_max - x_min) * padding;
        let y_pad = (y_max - y_min) * padding;

        Some(AxisRange {
            x_min: x_min - x_pad,
            x_max: x_max + x_pad,
            y_min: y_min - y_pad,
            y_max: y_max + y_pad,
        })
    }

    /// Mean, spread and extremes of the percent errors.
    pub fn summarize(errors: &[f64]) -> ErrorSummary {
        if errors.is_empty() {
            return ErrorSummary::default();
        }

        let std_dev = if errors.len() > 1 {
            errors.std_dev()
        } else {
            0.0
        };

        ErrorSummary {
            count: errors.len(),
            mean: errors.mean(),
            std_dev,
            median: Data::new(errors.to_vec()).median(),
            min: errors.min(),
            max: errors.max(),
        }
    }
}
