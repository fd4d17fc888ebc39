//! # prac-tabular
//!
//! Spreadsheet-facing file formats for PracTrack.
//!
//! - [`roster`]: parses a class list (CSV or Excel) into typed rows. Every data
//!   row yields a [`roster::RowOutcome`], so one bad row never aborts the file.
//! - [`export`]: writes ledger rows and the completion summary as
//!   comma-separated text in fixed column orders, with spreadsheet formula
//!   neutralisation.

pub mod error;
pub mod export;
pub mod roster;
mod workbook;

pub use error::TabularError;
pub use export::{
    COMPLETION_HEADER, EXPORT_HEADER, ExportOptions, completion_to_string, ledger_to_string,
    write_completion, write_ledger,
};
pub use roster::{
    ROSTER_HEADER, RosterRow, RowOutcome, parse_roster, parse_roster_file,
    parse_roster_workbook,
};
