//! Spreadsheet export of flat record lists.
//!
//! Records keep their field order; the first record fixes the column set and
//! header order, later records are matched by field name. Output is an xlsx
//! file with a styled header row and an optional summary sheet.

mod record;
mod writer;

pub use record::{CellValue, Record};
pub use writer::{export_records, ExportOptions, ExportReport};

/// Errors that can occur while exporting.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No hay datos para exportar")]
    NoData,

    #[error("Invalid export input: {0}")]
    InvalidInput(String),

    #[error("Failed to write spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
