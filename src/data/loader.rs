//! CSV Data Loader Module
//! Reads `time,temperature` files into a capacity-bounded [`Series`].

use super::parser::{self, ParseError, TimeFormat};
use super::series::{Sample, Series};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Row limit used by the plain CSV loader.
pub const LOADER_MAX_ROWS: usize = 300;
/// Row limit used by the thermal analyzer.
pub const ANALYZER_MAX_ROWS: usize = 500;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Error opening file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read CSV: {0}")]
    Read(#[from] std::io::Error),
}

/// A data line that was not turned into a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number in the file.
    pub line: u64,
    pub content: String,
    pub reason: ParseError,
}

/// Outcome of reading one file.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub series: Series,
    pub skipped: Vec<SkippedLine>,
    /// Data rows were left unread because the row limit was reached.
    pub truncated: bool,
}

impl LoadReport {
    pub fn row_count(&self) -> usize {
        self.series.len()
    }
}

/// Reads temperature CSV files with a fixed time format and row limit.
///
/// The first line is always treated as a header and discarded.
#[derive(Debug, Clone, Copy)]
pub struct DataLoader {
    format: TimeFormat,
    max_rows: usize,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::analyzer()
    }
}

impl DataLoader {
    pub fn new(format: TimeFormat, max_rows: usize) -> Self {
        Self { format, max_rows }
    }

    /// Plain numeric loader: seconds, 300 rows.
    pub fn seconds() -> Self {
        Self::new(TimeFormat::Seconds, LOADER_MAX_ROWS)
    }

    /// Clock-time loader used by the analyzer: hours, 500 rows.
    pub fn analyzer() -> Self {
        Self::new(TimeFormat::Clock, ANALYZER_MAX_ROWS)
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    pub fn format(&self) -> TimeFormat {
        self.format
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Open and read a CSV file.
    pub fn load_csv(&self, path: impl AsRef<Path>) -> Result<LoadReport, LoaderError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoaderError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let report = self.read_from(file)?;
        info!(
            "Loaded {} rows from {} ({} skipped{})",
            report.row_count(),
            path.display(),
            report.skipped.len(),
            if report.truncated { ", truncated" } else { "" }
        );
        Ok(report)
    }

    /// Read CSV content from any reader, one physical line at a time.
    ///
    /// Malformed lines (blank ones included) are skipped with a warning;
    /// only I/O failures abort.
    pub fn read_from<R: Read>(&self, reader: R) -> Result<LoadReport, LoaderError> {
        let mut lines = BufReader::new(reader).split(b'\n');

        // Header: dropped whatever it contains.
        if let Some(header) = lines.next() {
            header?;
        }

        let mut samples: Vec<Sample> = Vec::new();
        let mut skipped: Vec<SkippedLine> = Vec::new();
        let mut line_number = 1u64;

        while samples.len() < self.max_rows {
            let Some(bytes) = lines.next() else {
                break;
            };
            let bytes = bytes?;
            line_number += 1;

            let content = String::from_utf8_lossy(&bytes);
            match parser::parse_line(self.format, &content) {
                Ok(sample) => samples.push(sample),
                Err(reason) => {
                    let content = content.trim_end_matches(['\r', '\n']).to_string();
                    warn!("Could not parse line {}: {} ({})", line_number, content, reason);
                    skipped.push(SkippedLine {
                        line: line_number,
                        content,
                        reason,
                    });
                }
            }
        }

        let truncated = samples.len() >= self.max_rows && lines.next().is_some();
        if truncated {
            debug!("Row limit of {} reached, remaining lines ignored", self.max_rows);
        }

        Ok(LoadReport {
            series: Series::new(samples),
            skipped,
            truncated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(loader: DataLoader, text: &str) -> LoadReport {
        loader.read_from(text.as_bytes()).unwrap()
    }

    #[test]
    fn header_is_always_discarded() {
        let report = read(DataLoader::seconds(), "0,30\n1,29\n");
        assert_eq!(report.series.len(), 1);
        assert_eq!(report.series.get(0), Some(&Sample::new(1.0, 29.0)));
    }

    #[test]
    fn header_only_file_is_empty() {
        let report = read(DataLoader::analyzer(), "time,temperature\n");
        assert!(report.series.is_empty());
        assert!(report.skipped.is_empty());
        assert!(!report.truncated);
    }

    #[test]
    fn empty_input_is_empty() {
        let report = read(DataLoader::analyzer(), "");
        assert!(report.series.is_empty());
    }

    #[test]
    fn malformed_time_is_skipped_and_parsing_continues() {
        let text = "time,temperature\n0:00:00,30.0\nbad,20.5\n0:10:00,28.0\n";
        let report = read(DataLoader::analyzer(), text);

        assert_eq!(report.series.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 3);
        assert_eq!(report.skipped[0].content, "bad,20.5");
        assert!(matches!(report.skipped[0].reason, ParseError::InvalidTime(_)));
        assert_eq!(report.series.get(1).map(|s| s.temperature), Some(28.0));
    }

    #[test]
    fn single_field_line_is_skipped() {
        let text = "time,temperature\n0:00:00\n0:10:00,28.0\n";
        let report = read(DataLoader::analyzer(), text);
        assert_eq!(report.series.len(), 1);
        assert_eq!(
            report.skipped[0].reason,
            ParseError::MissingField("temperature")
        );
    }

    #[test]
    fn blank_first_line_is_the_header() {
        let report = read(DataLoader::analyzer(), "\n0:00:00,30.0\n0:10:00,28.0\n");
        assert_eq!(report.series.len(), 2);
        assert_eq!(report.series.get(0).map(|s| s.temperature), Some(30.0));
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn data_like_header_is_still_discarded() {
        let report = read(DataLoader::analyzer(), "0:00:00,99.0\n0:10:00,28.0\n");
        assert_eq!(report.series.len(), 1);
        assert_eq!(report.series.get(0).map(|s| s.temperature), Some(28.0));
    }

    #[test]
    fn stray_quote_does_not_swallow_later_lines() {
        let text = "time,temperature\n0:00:00,\"30.0\n0:10:00,28.0\n0:20:00,27.0\n";
        let report = read(DataLoader::analyzer(), text);

        assert_eq!(report.series.len(), 3);
        // No numeric prefix after the quote: best-effort 0.0.
        assert_eq!(report.series.get(0).map(|s| s.temperature), Some(0.0));
        assert_eq!(report.series.get(2), Some(&Sample::new(20.0 / 60.0, 27.0)));
    }

    #[test]
    fn blank_data_line_is_reported() {
        let text = "time,temperature\n0:00:00,30.0\n\n0:10:00,28.0\n";
        let report = read(DataLoader::analyzer(), text);

        assert_eq!(report.series.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 3);
        assert_eq!(report.skipped[0].content, "");
        assert_eq!(report.skipped[0].reason, ParseError::MissingField("time"));
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let report = read(DataLoader::seconds(), "t,T\r\n0,30\r\n1,29.5\r\n");
        assert_eq!(report.series.as_slice(), &[Sample::new(0.0, 30.0), Sample::new(1.0, 29.5)]);
    }

    #[test]
    fn rows_beyond_capacity_are_ignored() {
        let mut text = String::from("time,temperature\n");
        for i in 0..10 {
            text.push_str(&format!("{},{}\n", i, 30 - i));
        }
        let report = read(DataLoader::seconds().with_max_rows(4), &text);

        assert_eq!(report.series.len(), 4);
        assert!(report.truncated);
        assert_eq!(report.series.last(), Some(&Sample::new(3.0, 27.0)));
    }

    #[test]
    fn exact_capacity_is_not_truncated() {
        let report = read(DataLoader::seconds().with_max_rows(2), "t,T\n0,1\n1,2\n");
        assert_eq!(report.series.len(), 2);
        assert!(!report.truncated);
    }

    #[test]
    fn missing_file_reports_open_error() {
        let err = DataLoader::seconds()
            .load_csv("definitely/not/here.csv")
            .unwrap_err();
        assert!(matches!(err, LoaderError::Open { .. }));
    }
}
