//! Class-list (roster) parsing.
//!
//! The file layout is fixed: a header row naming `last_name, initials,
//! student_id` in that order, then one student per row. Header names are
//! compared case-insensitively; `student_name` and `student_initials` are
//! accepted for the first two columns since older class lists use them.
//!
//! Class lists arrive as CSV or as an Excel workbook (`.xlsx`, `.xlsm`);
//! both produce the same [`RowOutcome`] stream.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use prac_core::ids::{normalize_key, require_text};

use crate::error::TabularError;

/// Expected header, in order.
pub const ROSTER_HEADER: [&str; 3] = ["last_name", "initials", "student_id"];

const HEADER_ALIASES: [&[&str]; 3] = [
    &["last_name", "student_name"],
    &["initials", "student_initials"],
    &["student_id"],
];

/// A validated roster row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    /// 1-based line in the source file.
    pub line: u64,
    pub last_name: String,
    pub initials: String,
    pub student_id: String,
}

/// Outcome of parsing one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Valid(RosterRow),
    Invalid { line: u64, reason: String },
}

impl RowOutcome {
    #[must_use]
    pub const fn line(&self) -> u64 {
        match self {
            Self::Valid(row) => row.line,
            Self::Invalid { line, .. } => *line,
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Parse a roster file from disk, choosing the reader by file extension.
/// Workbooks (`.xlsx`, `.xlsm`) are read from their first sheet; anything
/// else is treated as CSV.
///
/// # Errors
///
/// Returns `TabularError` if the file cannot be opened or its header is wrong.
pub fn parse_roster_file(path: &Path) -> Result<Vec<RowOutcome>, TabularError> {
    if is_workbook(path) {
        return parse_roster_workbook(path);
    }
    let file = File::open(path)?;
    parse_roster(file)
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx") || ext.eq_ignore_ascii_case("xlsm"))
}

/// Parse the first sheet of an Excel workbook.
///
/// Line numbers are worksheet row numbers, so they match what the user sees
/// in their spreadsheet program.
///
/// # Errors
///
/// Returns `TabularError` if the workbook cannot be read, has no sheets, or
/// its header is wrong.
pub fn parse_roster_workbook(path: &Path) -> Result<Vec<RowOutcome>, TabularError> {
    let sheet = crate::workbook::read_first_sheet(path)?;
    let mut rows = sheet.rows.into_iter();

    let header = rows.next().map(|(_, cells)| cells).unwrap_or_default();
    check_header(header.iter().map(String::as_str))?;

    let mut outcomes = Vec::new();
    for (line, cells) in rows {
        if cells.iter().all(String::is_empty) {
            continue;
        }
        let fields: Vec<&str> = cells.iter().map(String::as_str).collect();
        outcomes.push(validate_fields(&fields, line));
    }

    tracing::debug!(
        sheet = %sheet.name,
        rows = outcomes.len(),
        valid = outcomes.iter().filter(|o| o.is_valid()).count(),
        "parsed roster workbook"
    );
    Ok(outcomes)
}

/// Parse roster CSV from any reader.
///
/// Fully blank rows are ignored. Every other data row produces exactly one
/// [`RowOutcome`].
///
/// # Errors
///
/// Returns `TabularError` only for file-level problems: no header, a header
/// that does not match [`ROSTER_HEADER`], or an unreadable stream.
pub fn parse_roster<R: Read>(reader: R) -> Result<Vec<RowOutcome>, TabularError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    check_header(csv.headers()?.iter())?;

    let mut outcomes = Vec::new();
    for (index, result) in csv.records().enumerate() {
        let fallback_line = index as u64 + 2;
        let record = match result {
            Ok(record) => record,
            Err(error) => {
                let line = error
                    .position()
                    .map_or(fallback_line, csv::Position::line);
                tracing::warn!(line, %error, "unreadable roster row");
                outcomes.push(RowOutcome::Invalid {
                    line,
                    reason: error.to_string(),
                });
                continue;
            }
        };

        if record.iter().all(str::is_empty) {
            continue;
        }

        let line = record
            .position()
            .map_or(fallback_line, csv::Position::line);
        let fields: Vec<&str> = record.iter().collect();
        outcomes.push(validate_fields(&fields, line));
    }

    tracing::debug!(
        rows = outcomes.len(),
        valid = outcomes.iter().filter(|o| o.is_valid()).count(),
        "parsed roster"
    );
    Ok(outcomes)
}

fn check_header<'a>(header: impl Iterator<Item = &'a str>) -> Result<(), TabularError> {
    let expected = ROSTER_HEADER.join(",");
    let found: Vec<String> = header
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_ascii_lowercase())
        .collect();
    if found.iter().all(String::is_empty) {
        return Err(TabularError::Empty { expected });
    }

    let matches = found.len() >= ROSTER_HEADER.len()
        && HEADER_ALIASES
            .iter()
            .zip(&found)
            .all(|(aliases, name)| aliases.contains(&name.as_str()));

    if matches {
        Ok(())
    } else {
        Err(TabularError::Header {
            expected,
            found: found.join(","),
        })
    }
}

fn validate_fields(fields: &[&str], line: u64) -> RowOutcome {
    let field = |idx: usize| fields.get(idx).copied().unwrap_or_default();

    let student_id = match normalize_key(field(2), "student_id") {
        Ok(id) => id,
        Err(error) => {
            return RowOutcome::Invalid {
                line,
                reason: error.to_string(),
            };
        }
    };
    let last_name = match require_text(field(0), "last_name") {
        Ok(name) => name,
        Err(error) => {
            return RowOutcome::Invalid {
                line,
                reason: error.to_string(),
            };
        }
    };

    RowOutcome::Valid(RosterRow {
        line,
        last_name,
        initials: field(1).to_string(),
        student_id,
    })
}
