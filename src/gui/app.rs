//! Thermal Analyzer Main Application
//! Main window with control panel, graph, data table and image viewer.

use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, DataTable, ImageViewer};
use egui::SidePanel;
use log::{error, info, warn};
use std::path::PathBuf;
use thermal_analysis::charts::StaticChartRenderer;
use thermal_analysis::data::ResultTable;
use thermal_analysis::{AnalyzerConfig, ThermalAnalysis};

/// Main application window. Owns the analysis built at startup.
pub struct ThermalApp {
    analysis: ThermalAnalysis,
    config: AnalyzerConfig,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
    data_table: DataTable,
    image_viewer: ImageViewer,
    last_export: Option<PathBuf>,
}

impl ThermalApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        analysis: ThermalAnalysis,
        config: AnalyzerConfig,
    ) -> Self {
        let mut control_panel = ControlPanel::new(&config.csv_path);
        control_panel.set_status(&format!("Loaded {} points", analysis.len()));

        Self {
            data_table: DataTable::new(config.table_interval_minutes),
            analysis,
            config,
            control_panel,
            chart_viewer: ChartViewer::new(),
            image_viewer: ImageViewer::new(),
            last_export: None,
        }
    }

    /// Pick another CSV and rebuild the analysis; the old one stays on failure.
    fn handle_open_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        else {
            return;
        };

        let mut config = self.config.clone();
        config.csv_path = path.clone();

        match ThermalAnalysis::from_config(&config) {
            Ok(analysis) => {
                self.control_panel
                    .set_status(&format!("Loaded {} points", analysis.len()));
                self.control_panel.csv_path = Some(path);
                self.analysis = analysis;
                self.config = config;
                self.data_table.reset_sort();
            }
            Err(e) => {
                error!("{}", e);
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }

    fn handle_view_circuit(&mut self, ctx: &egui::Context) {
        if let Err(e) = self.image_viewer.open(ctx, &self.config.image_path) {
            warn!(
                "Failed to load circuit image: {} ({})",
                self.config.image_path.display(),
                e
            );
            self.control_panel.set_status(&format!(
                "Failed to load circuit image: {}",
                self.config.image_path.display()
            ));
        }
    }

    fn handle_export_chart(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .add_filter("SVG Image", &["svg"])
            .set_file_name("thermal_analysis.png")
            .save_file()
        else {
            return;
        };

        match StaticChartRenderer::render(&self.analysis, &path, None) {
            Ok(()) => {
                info!("Chart written to {}", path.display());
                self.control_panel
                    .set_status(&format!("Saved chart: {}", path.display()));
                self.set_last_export(path);
            }
            Err(e) => {
                error!("Chart export failed: {}", e);
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }

    fn handle_export_table(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name("thermal_analysis_results.csv")
            .save_file()
        else {
            return;
        };

        match ResultTable::export(&self.analysis, &path) {
            Ok(rows) => {
                info!("{} rows written to {}", rows, path.display());
                self.control_panel
                    .set_status(&format!("Saved {} rows: {}", rows, path.display()));
                self.set_last_export(path);
            }
            Err(e) => {
                error!("Table export failed: {}", e);
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }

    fn handle_open_export(&mut self) {
        if let Some(path) = &self.last_export {
            if let Err(e) = open::that(path) {
                warn!("Could not open {}: {}", path.display(), e);
                self.control_panel
                    .set_status(&format!("Failed to open {}", path.display()));
            }
        }
    }

    fn set_last_export(&mut self, path: PathBuf) {
        self.last_export = Some(path);
        self.control_panel.has_export = true;
    }
}

impl eframe::App for ThermalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        SidePanel::left("control_panel")
            .min_width(240.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui, &self.analysis);

                    match action {
                        ControlPanelAction::OpenCsv => self.handle_open_csv(),
                        ControlPanelAction::ShowDataTable => self.data_table.open = true,
                        ControlPanelAction::ViewCircuit => self.handle_view_circuit(ctx),
                        ControlPanelAction::ExportChart => self.handle_export_chart(),
                        ControlPanelAction::ExportTable => self.handle_export_table(),
                        ControlPanelAction::OpenExport => self.handle_open_export(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui, &self.analysis);
        });

        self.data_table.show(ctx, &self.analysis);
        self.image_viewer.show(ctx);
    }
}
