//! Thermal Analyzer - recorded cooling curve vs Euler prediction
//!
//! Loads the temperature CSV, runs the analysis once, then opens a window
//! with the comparison graph, a data table and the circuit diagram viewer.
//!
//! ```bash
//! thermal-analyzer temperature_data.csv
//! thermal-analyzer --config analyzer.json --no-gui --export-chart chart.png
//! ```

mod gui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;
use gui::ThermalApp;
use log::info;
use std::path::PathBuf;
use thermal_analysis::charts::StaticChartRenderer;
use thermal_analysis::data::ResultTable;
use thermal_analysis::{AnalyzerConfig, ThermalAnalysis};

#[derive(Parser)]
#[command(name = "thermal-analyzer")]
#[command(author, version, about = "Thermal Analysis System", long_about = None)]
struct Cli {
    /// Input CSV file (`H:M:S,temperature` rows after one header line)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Circuit diagram image shown by the image viewer
    #[arg(long)]
    image: Option<PathBuf>,

    /// Maximum number of data rows to read
    #[arg(short = 'n', long)]
    max_rows: Option<usize>,

    /// Write the comparison chart to this file (.png or .svg)
    #[arg(long, value_name = "PATH")]
    export_chart: Option<PathBuf>,

    /// Write the full results table to this CSV file
    #[arg(long, value_name = "PATH")]
    export_table: Option<PathBuf>,

    /// Run the analysis and exports without opening a window
    #[arg(long)]
    no_gui: bool,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn resolve_config(&self) -> Result<AnalyzerConfig> {
        let mut config = match &self.config {
            Some(path) => AnalyzerConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => AnalyzerConfig::default(),
        };

        if let Some(input) = &self.input {
            config.csv_path = input.clone();
        }
        if let Some(image) = &self.image {
            config.image_path = image.clone();
        }
        if let Some(max_rows) = self.max_rows {
            config.max_rows = max_rows;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = cli.resolve_config()?;
    let analysis = ThermalAnalysis::from_config(&config)
        .context("Failed to load data. Check CSV file.")?;

    if let Some(path) = &cli.export_chart {
        StaticChartRenderer::render(&analysis, path, None)
            .map_err(|e| anyhow!("Failed to render chart {}: {}", path.display(), e))?;
        info!("Chart written to {}", path.display());
    }
    if let Some(path) = &cli.export_table {
        let rows = ResultTable::export(&analysis, path)
            .with_context(|| format!("Failed to write table {}", path.display()))?;
        info!("{} rows written to {}", rows, path.display());
    }

    if cli.no_gui {
        let summary = analysis.summary();
        println!(
            "{} points, total error {:.4} %, mean {:.4} %, max {:.4} %",
            analysis.len(),
            analysis.total_error(),
            summary.mean,
            summary.max
        );
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Thermal Analysis System"),
        ..Default::default()
    };

    eframe::run_native(
        "Thermal Analysis System",
        options,
        Box::new(move |cc| Ok(Box::new(ThermalApp::new(cc, analysis, config)))),
    )
    .map_err(|e| anyhow!("GUI error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config_defaults() {
        let cli = Cli::parse_from([
            "thermal-analyzer",
            "run.csv",
            "--image",
            "board.png",
            "--max-rows",
            "20",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.csv_path, PathBuf::from("run.csv"));
        assert_eq!(config.image_path, PathBuf::from("board.png"));
        assert_eq!(config.max_rows, 20);
        assert_eq!(config.table_interval_minutes, 10);
    }

    #[test]
    fn cli_without_arguments_uses_defaults() {
        let cli = Cli::parse_from(["thermal-analyzer"]);
        assert_eq!(cli.resolve_config().unwrap(), AnalyzerConfig::default());
        assert!(!cli.no_gui);
    }
}
