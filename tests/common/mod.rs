//! Shared fixtures for integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

/// Write `header` followed by `rows` (one per line) into a temporary CSV file.
pub fn csv_file(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp csv");
    writeln!(file, "{}", header).expect("write header");
    for row in rows {
        writeln!(file, "{}", row).expect("write row");
    }
    file.flush().expect("flush temp csv");
    file
}

/// `count` clock-formatted rows, one per minute, cooling by 0.05 °C each.
pub fn minute_rows(count: usize) -> Vec<String> {
    (0..count)
        .map(|m| format!("{}:{:02}:00,{:.2}", m / 60, m % 60, 40.0 - m as f64 * 0.05))
        .collect()
}
