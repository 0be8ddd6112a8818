//! Statistics module - error aggregation and plot ranges

mod calculator;

pub use calculator::{AxisRange, ErrorCalculator, ErrorSummary, AXIS_PADDING};
