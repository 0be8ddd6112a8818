//! Control Panel Widget
//! Left side panel with the data source, error summary and action buttons.

use egui::{Color32, RichText};
use std::path::{Path, PathBuf};
use thermal_analysis::ThermalAnalysis;

/// Left side control panel.
pub struct ControlPanel {
    pub csv_path: Option<PathBuf>,
    pub status: String,
    pub has_export: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            csv_path: None,
            status: "Ready".to_string(),
            has_export: false,
        }
    }
}

impl ControlPanel {
    pub fn new(csv_path: &Path) -> Self {
        Self {
            csv_path: Some(csv_path.to_path_buf()),
            ..Self::default()
        }
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui, analysis: &ThermalAnalysis) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🌡 Thermal Analysis")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Euler vs recorded cooling")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());
                    ui.label(RichText::new(&path_text).size(12.0));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Open").clicked() {
                            action = ControlPanelAction::OpenCsv;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Summary =====
        ui.label(RichText::new("📊 Error Summary").size(14.0).strong());
        ui.add_space(5.0);

        let summary = analysis.summary();
        let model = analysis.model();
        egui::Grid::new("summary_grid")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label("Points:");
                ui.label(analysis.len().to_string());
                ui.end_row();
                ui.label("k / T_ambient:");
                ui.label(format!("{} / {} °C", model.k, model.ambient_c));
                ui.end_row();
                ui.label("Total error:");
                ui.label(format!("{:.4} %", analysis.total_error()));
                ui.end_row();
                ui.label("Mean error:");
                ui.label(format!("{:.4} %", summary.mean));
                ui.end_row();
                ui.label("Max error:");
                ui.label(format!("{:.4} %", summary.max));
                ui.end_row();
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let size = egui::vec2(200.0, 30.0);
            if ui
                .add(egui::Button::new("Show Data Table").min_size(size))
                .clicked()
            {
                action = ControlPanelAction::ShowDataTable;
            }
            ui.add_space(5.0);
            if ui
                .add(egui::Button::new("View Circuit Diagram").min_size(size))
                .clicked()
            {
                action = ControlPanelAction::ViewCircuit;
            }
            ui.add_space(12.0);
            if ui
                .add(egui::Button::new("🖼 Export Chart").min_size(size))
                .clicked()
            {
                action = ControlPanelAction::ExportChart;
            }
            ui.add_space(5.0);
            if ui
                .add(egui::Button::new("📄 Export Table CSV").min_size(size))
                .clicked()
            {
                action = ControlPanelAction::ExportTable;
            }
            ui.add_space(5.0);
            ui.add_enabled_ui(self.has_export, |ui| {
                if ui
                    .add(egui::Button::new("Open Last Export").min_size(size))
                    .clicked()
                {
                    action = ControlPanelAction::OpenExport;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") || self.status.contains("Failed") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Saved") || self.status.contains("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    OpenCsv,
    ShowDataTable,
    ViewCircuit,
    ExportChart,
    ExportTable,
    OpenExport,
}
