//! Error types for tabular parsing and writing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TabularError {
    /// The file had no header row at all.
    #[error("Roster file is empty (expected header: {expected})")]
    Empty { expected: String },

    /// The header row does not match the fixed column layout.
    #[error("Unexpected roster header: expected '{expected}', found '{found}'")]
    Header { expected: String, found: String },

    /// Underlying CSV reader/writer failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File could not be opened or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Excel workbook could not be opened or a sheet could not be read.
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// The workbook contains no worksheets.
    #[error("Workbook has no sheets")]
    NoSheets,

    /// Written bytes were not valid UTF-8.
    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
