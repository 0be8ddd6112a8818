//! Data Table Window
//! Rows at fixed minute marks, sortable by any column, with the total error.

use egui::{RichText, ScrollArea};
use std::cmp::Ordering;
use thermal_analysis::{AnalysisRow, ThermalAnalysis};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Index,
    Time,
    Actual,
    Euler,
    Error,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Index,
        SortColumn::Time,
        SortColumn::Actual,
        SortColumn::Euler,
        SortColumn::Error,
    ];

    pub fn header(self) -> &'static str {
        match self {
            SortColumn::Index => "#",
            SortColumn::Time => "Time (hours)",
            SortColumn::Actual => "Actual (°C)",
            SortColumn::Euler => "Euler (°C)",
            SortColumn::Error => "Error (%)",
        }
    }

    fn key(self, row: &AnalysisRow) -> f64 {
        match self {
            SortColumn::Index => row.index as f64,
            SortColumn::Time => row.time,
            SortColumn::Actual => row.actual,
            SortColumn::Euler => row.predicted,
            SortColumn::Error => row.error,
        }
    }
}

pub struct DataTable {
    pub open: bool,
    interval_minutes: u32,
    sort: SortColumn,
    ascending: bool,
}

impl DataTable {
    pub fn new(interval_minutes: u32) -> Self {
        Self {
            open: false,
            interval_minutes,
            sort: SortColumn::Index,
            ascending: true,
        }
    }

    /// Clicking the active column flips the order; another column sorts ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.sort == column {
            self.ascending = !self.ascending;
        } else {
            self.sort = column;
            self.ascending = true;
        }
    }

    pub fn reset_sort(&mut self) {
        self.sort = SortColumn::Index;
        self.ascending = true;
    }

    /// Filtered rows in the current sort order. NaN values go last in both directions.
    pub fn sorted_rows(&self, analysis: &ThermalAnalysis) -> Vec<AnalysisRow> {
        let mut rows = analysis.table_rows(self.interval_minutes);
        let column = self.sort;
        rows.sort_by(|a, b| {
            let (ka, kb) = (column.key(a), column.key(b));
            match (ka.is_nan(), kb.is_nan()) {
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (true, true) => Ordering::Equal,
                (false, false) if self.ascending => ka.total_cmp(&kb),
                (false, false) => kb.total_cmp(&ka),
            }
        });
        rows
    }

    pub fn show(&mut self, ctx: &egui::Context, analysis: &ThermalAnalysis) {
        if !self.open {
            return;
        }

        let mut open = self.open;
        egui::Window::new("Data Table")
            .open(&mut open)
            .default_size([600.0, 400.0])
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(format!(
                        "Total Absolute Error: {:.4} %",
                        analysis.total_error()
                    ))
                    .strong(),
                );
                ui.separator();
                self.draw_grid(ui, analysis);
            });
        self.open = open;
    }

    fn draw_grid(&mut self, ui: &mut egui::Ui, analysis: &ThermalAnalysis) {
        let rows = self.sorted_rows(analysis);
        let mut clicked = None;

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            egui::Grid::new("data_table_grid")
                .striped(true)
                .min_col_width(80.0)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for column in SortColumn::ALL {
                        let active = self.sort == column;
                        let arrow = match (active, self.ascending) {
                            (true, true) => " ⏶",
                            (true, false) => " ⏷",
                            _ => "",
                        };
                        let text = RichText::new(format!("{}{}", column.header(), arrow)).strong();
                        if ui.selectable_label(active, text).clicked() {
                            clicked = Some(column);
                        }
                    }
                    ui.end_row();

                    for row in &rows {
                        ui.label((row.index + 1).to_string());
                        ui.label(format!("{:.4}", row.time));
                        ui.label(format!("{:.2}", row.actual));
                        ui.label(format!("{:.2}", row.predicted));
                        ui.label(format!("{:.4}", row.error));
                        ui.end_row();
                    }
                });
        });

        if let Some(column) = clicked {
            self.toggle_sort(column);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermal_analysis::{CoolingModel, Sample, Series};

    fn analysis() -> ThermalAnalysis {
        // One sample per minute for 30 minutes, rising actual values.
        let series: Series = (0..=30)
            .map(|m| Sample::new(m as f64 / 60.0, 30.0 + m as f64))
            .collect();
        ThermalAnalysis::new(series, &CoolingModel::default(), 0.05).unwrap()
    }

    #[test]
    fn rows_are_filtered_to_interval() {
        let table = DataTable::new(10);
        let indices: Vec<usize> = table.sorted_rows(&analysis()).iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 10, 20, 30]);
    }

    #[test]
    fn toggling_same_column_reverses_order() {
        let mut table = DataTable::new(10);
        table.toggle_sort(SortColumn::Actual);
        let asc: Vec<usize> = table.sorted_rows(&analysis()).iter().map(|r| r.index).collect();
        assert_eq!(asc, vec![0, 10, 20, 30]);

        table.toggle_sort(SortColumn::Actual);
        let desc: Vec<usize> = table.sorted_rows(&analysis()).iter().map(|r| r.index).collect();
        assert_eq!(desc, vec![30, 20, 10, 0]);
    }

    #[test]
    fn switching_column_sorts_ascending() {
        let mut table = DataTable::new(0);
        table.toggle_sort(SortColumn::Index);
        assert!(!table.ascending);
        table.toggle_sort(SortColumn::Error);
        assert_eq!(table.sort, SortColumn::Error);
        assert!(table.ascending);

        let rows = table.sorted_rows(&analysis());
        assert!(rows.windows(2).all(|w| w[0].error <= w[1].error));
    }

    #[test]
    fn nan_errors_sort_last_either_way() {
        // A zero start makes the first error 0/0.
        let series: Series = (0..=3)
            .map(|m| Sample::new(m as f64, m as f64 * 10.0))
            .collect();
        let analysis = ThermalAnalysis::new(series, &CoolingModel::default(), 0.05).unwrap();
        assert!(analysis.error(0).unwrap().is_nan());

        let mut table = DataTable::new(0);
        table.toggle_sort(SortColumn::Error);
        let asc = table.sorted_rows(&analysis);
        assert_eq!(asc.last().map(|r| r.index), Some(0));
        assert!(asc[..3].windows(2).all(|w| w[0].error <= w[1].error));

        table.toggle_sort(SortColumn::Error);
        let desc = table.sorted_rows(&analysis);
        assert_eq!(desc.last().map(|r| r.index), Some(0));
        assert!(desc[..3].windows(2).all(|w| w[0].error >= w[1].error));
    }
}
