//! Charts module - static chart export

mod renderer;

pub use renderer::{
    ChartConfig, StaticChartRenderer, ACTUAL_COLOR, ERROR_COLOR, EULER_COLOR, FORMULA,
};
