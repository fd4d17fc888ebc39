//! Entity structs for all PracTrack domain objects.
//!
//! Each stored entity maps to one table in the local database. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema` for CLI output and
//! `prac schema`.

mod log_entry;
mod site;
mod student;

pub use log_entry::{LedgerRow, LogEntry, NewLogEntry};
pub use site::{DEFAULT_SITES, DefaultSite, Site};
pub use student::Student;
