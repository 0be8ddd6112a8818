//! Forward Euler prediction of a cooling curve.
//!
//! ```text
//! h      = (t[n-1] - t[0]) / (n - 1)
//! y[0]   = T_actual[0]
//! y[i]   = y[i-1] + h * f(t[i-1], y[i-1])
//! ```
//!
//! The step is derived once from the endpoints, so irregular sampling is
//! treated as if it were evenly spaced. Each step feeds on the previous
//! *predicted* value, never the recorded one.

use super::cooling::CoolingModel;
use crate::data::Series;
use log::debug;

/// Uniform step size spanning the series, or `None` for fewer than two samples.
pub fn step_size(series: &Series) -> Option<f64> {
    let n = series.len();
    if n <= 1 {
        return None;
    }
    let (first, last) = (series.first()?, series.last()?);
    Some((last.time - first.time) / (n - 1) as f64)
}

/// Predict the temperature at every sample index.
///
/// Returns an empty vector when the series has one sample or none; callers
/// decide how to seed that case.
pub fn euler_predictions(series: &Series, model: &CoolingModel) -> Vec<f64> {
    let Some(h) = step_size(series) else {
        return Vec::new();
    };
    debug!("Euler step h = {h} over {} samples", series.len());

    let samples = series.as_slice();
    let mut predictions = Vec::with_capacity(samples.len());
    predictions.push(samples[0].temperature);

    for i in 1..samples.len() {
        let prev = predictions[i - 1];
        predictions.push(prev + h * model.derivative(samples[i - 1].time, prev));
    }

    predictions
}
