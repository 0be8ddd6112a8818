//! Static Chart Renderer
//! Draws the actual-vs-Euler comparison graph to PNG or SVG with `plotters`.
//!
//! Layout:
//! 1. Green error-magnitude bars between actual and predicted values
//! 2. Red line: recorded temperatures
//! 3. Blue line: Euler prediction
//! 4. Legend (upper right) and the closed-form cooling law as a footer

use crate::analysis::ThermalAnalysis;
use crate::stats::AxisRange;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

pub const ACTUAL_COLOR: RGBColor = RGBColor(255, 0, 0);
pub const EULER_COLOR: RGBColor = RGBColor(0, 0, 255);
pub const ERROR_COLOR: RGBColor = RGBColor(0, 179, 0);

pub const FORMULA: &str = "T(t) = T_ambient + (T_initial - T_ambient) * e^(-k * t)";

#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    /// Half-width of each error bar, as a fraction of the x span.
    pub bar_half_width: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 700,
            title: "Thermal Analysis".to_string(),
            xlabel: "Time (hours)".to_string(),
            ylabel: "Temperature (°C)".to_string(),
            bar_half_width: 0.002,
        }
    }
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render to `output_path`; `.svg` selects the SVG backend, anything else PNG.
    pub fn render(
        analysis: &ThermalAnalysis,
        output_path: &Path,
        config: Option<&ChartConfig>,
    ) -> Result<(), Box<dyn Error>> {
        let owned_config = config.cloned().unwrap_or_default();
        let config = &owned_config;
        let size = (config.width, config.height);

        let is_svg = output_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        if is_svg {
            let root = SVGBackend::new(output_path, size).into_drawing_area();
            Self::draw_on_area(&root, analysis, config)
        } else {
            let root = BitMapBackend::new(output_path, size).into_drawing_area();
            Self::draw_on_area(&root, analysis, config)
        }
    }

    /// Axis bounds used for drawing. A zero-span axis is widened by one unit
    /// each side; a non-finite axis falls back to `0..1`.
    pub fn drawing_range(range: &AxisRange) -> AxisRange {
        let widen = |lo: f64, hi: f64| {
            if !(lo.is_finite() && hi.is_finite()) {
                (0.0, 1.0)
            } else if hi > lo {
                (lo, hi)
            } else {
                (lo - 1.0, hi + 1.0)
            }
        };
        let (x_min, x_max) = widen(range.x_min, range.x_max);
        let (y_min, y_max) = widen(range.y_min, range.y_max);
        AxisRange {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    fn draw_on_area<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        analysis: &ThermalAnalysis,
        config: &ChartConfig,
    ) -> Result<(), Box<dyn Error>>
    where
        <DB as DrawingBackend>::ErrorType: 'static,
    {
        let range = Self::drawing_range(analysis.range());

        root.fill(&WHITE)?;
        let (plot_area, footer) = root.split_vertically((config.height as i32 - 30).max(1));

        let mut chart = ChartBuilder::on(&plot_area)
            .caption(&config.title, ("sans-serif", 28.0).into_font())
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(range.x_min..range.x_max, range.y_min..range.y_max)?;

        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .draw()?;

        let half_width = (range.x_max - range.x_min) * config.bar_half_width;
        chart
            .draw_series(
                analysis
                    .rows()
                    .filter(|row| row.actual.is_finite() && row.predicted.is_finite())
                    .map(|row| {
                        let (lo, hi) = if row.actual < row.predicted {
                            (row.actual, row.predicted)
                        } else {
                            (row.predicted, row.actual)
                        };
                        Rectangle::new(
                            [(row.time - half_width, lo), (row.time + half_width, hi)],
                            ERROR_COLOR.filled(),
                        )
                    }),
            )?
            .label("Error Magnitude")
            .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], ERROR_COLOR.filled()));

        chart
            .draw_series(LineSeries::new(
                analysis.rows().map(|row| (row.time, row.actual)),
                ACTUAL_COLOR.stroke_width(2),
            ))?
            .label("Actual Data")
            .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], ACTUAL_COLOR.filled()));

        chart
            .draw_series(LineSeries::new(
                analysis.rows().map(|row| (row.time, row.predicted)),
                EULER_COLOR.stroke_width(2),
            ))?
            .label("Euler Prediction")
            .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], EULER_COLOR.filled()));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        footer.draw_text(
            FORMULA,
            &("sans-serif", 14.0).into_font().color(&RGBColor(51, 51, 51)),
            (20, 5),
        )?;

        root.present()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawing_range_widens_degenerate_axes() {
        let point = AxisRange {
            x_min: 2.0,
            x_max: 2.0,
            y_min: 30.0,
            y_max: 30.0,
        };
        let drawn = StaticChartRenderer::drawing_range(&point);
        assert_eq!((drawn.x_min, drawn.x_max), (1.0, 3.0));
        assert_eq!((drawn.y_min, drawn.y_max), (29.0, 31.0));
    }

    #[test]
    fn drawing_range_keeps_valid_axes() {
        let range = AxisRange {
            x_min: -0.1,
            x_max: 2.1,
            y_min: 19.5,
            y_max: 30.5,
        };
        assert_eq!(StaticChartRenderer::drawing_range(&range), range);
    }
}
