//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;
mod data_table;
mod image_viewer;

pub use app::ThermalApp;
pub use chart_viewer::ChartViewer;
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use data_table::DataTable;
pub use image_viewer::ImageViewer;
