//! Data module - CSV loading, line parsing and result tables

mod loader;
pub mod parser;
mod series;
mod table;

pub use loader::{
    DataLoader, LoadReport, LoaderError, SkippedLine, ANALYZER_MAX_ROWS, LOADER_MAX_ROWS,
};
pub use parser::{ParseError, TimeFormat};
pub use series::{Sample, Series};
pub use table::{ResultTable, TableError};
