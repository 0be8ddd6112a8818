//! Chart Viewer Widget
//! Central graph canvas: recorded curve, Euler prediction and error bars.

use egui::{Color32, RichText};
use egui_plot::{Legend, Line, Plot, PlotPoints};
use plotters::style::RGBColor;
use thermal_analysis::charts::{ACTUAL_COLOR, ERROR_COLOR, EULER_COLOR, FORMULA};
use thermal_analysis::ThermalAnalysis;

/// Same palette as the static export.
pub fn to_color32(color: RGBColor) -> Color32 {
    Color32::from_rgb(color.0, color.1, color.2)
}

pub struct ChartViewer {
    /// Draw the per-point error bars.
    pub show_errors: bool,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self { show_errors: true }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, analysis: &ThermalAnalysis) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Graph").size(16.0).strong());
            ui.add_space(12.0);
            ui.checkbox(&mut self.show_errors, "Error bars");
        });
        ui.add_space(5.0);

        let range = analysis.range();
        let show_errors = self.show_errors;
        let plot_height = (ui.available_height() - 30.0).max(200.0);

        Plot::new("thermal_graph")
            .height(plot_height)
            .legend(Legend::default())
            .x_axis_label("Time (hours)")
            .y_axis_label("Temperature (°C)")
            .include_x(range.x_min)
            .include_x(range.x_max)
            .include_y(range.y_min)
            .include_y(range.y_max)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                if show_errors {
                    let color = to_color32(ERROR_COLOR);
                    for row in analysis.rows() {
                        if !(row.actual.is_finite() && row.predicted.is_finite()) {
                            continue;
                        }
                        let bar: PlotPoints =
                            vec![[row.time, row.actual], [row.time, row.predicted]].into();
                        plot_ui.line(
                            Line::new(bar)
                                .color(color)
                                .width(4.0)
                                .name("Error Magnitude"),
                        );
                    }
                }

                let actual: PlotPoints = analysis.rows().map(|r| [r.time, r.actual]).collect();
                plot_ui.line(
                    Line::new(actual)
                        .color(to_color32(ACTUAL_COLOR))
                        .width(2.0)
                        .name("Actual Data"),
                );

                let euler: PlotPoints = analysis.rows().map(|r| [r.time, r.predicted]).collect();
                plot_ui.line(
                    Line::new(euler)
                        .color(to_color32(EULER_COLOR))
                        .width(2.0)
                        .name("Euler Prediction"),
                );
            });

        ui.label(
            RichText::new(FORMULA)
                .size(10.0)
                .color(Color32::from_rgb(51, 51, 51)),
        );
    }
}
