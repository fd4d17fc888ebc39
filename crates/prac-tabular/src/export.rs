//! Ledger and completion-summary export as comma-separated text.
//!
//! Column order is fixed by [`EXPORT_HEADER`] (one row per log entry) and
//! [`COMPLETION_HEADER`] (one row per student and site).

use std::io::Write;

use prac_core::entities::LedgerRow;
use prac_core::responses::CompletionReportRow;

use crate::error::TabularError;

pub const EXPORT_HEADER: [&str; 7] = [
    "student_id",
    "last_name",
    "initials",
    "site_id",
    "site_name",
    "date",
    "hours",
];

pub const COMPLETION_HEADER: [&str; 9] = [
    "student_id",
    "last_name",
    "initials",
    "site_id",
    "site_name",
    "completed_hours",
    "required_hours",
    "owed_hours",
    "percent",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Prefix text cells starting with `= + - @` with `'` so spreadsheets do
    /// not evaluate them as formulas.
    pub neutralize_formulas: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            neutralize_formulas: true,
        }
    }
}

/// Write `rows` (with header) to `writer`. Returns the number of data rows.
///
/// # Errors
///
/// Returns `TabularError` if writing fails.
pub fn write_ledger<W: Write>(
    writer: W,
    rows: &[LedgerRow],
    options: ExportOptions,
) -> Result<u64, TabularError> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv.write_record(EXPORT_HEADER)?;
    let text = |value: &str| {
        if options.neutralize_formulas {
            neutralize_formula(value)
        } else {
            value.to_string()
        }
    };

    let mut written = 0u64;
    for row in rows {
        // Keys go out verbatim so the file can be matched back to the store.
        csv.write_record([
            row.student_id.clone(),
            text(&row.last_name),
            text(&row.initials),
            row.site_id.clone(),
            text(&row.site_name),
            row.date.format("%Y-%m-%d").to_string(),
            row.hours.to_string(),
        ])?;
        written += 1;
    }
    csv.flush()?;
    tracing::debug!(rows = written, "wrote ledger export");
    Ok(written)
}

/// Render `rows` (with header) into a string.
///
/// # Errors
///
/// Returns `TabularError` if CSV encoding fails.
pub fn ledger_to_string(rows: &[LedgerRow], options: ExportOptions) -> Result<String, TabularError> {
    let mut buf = Vec::new();
    write_ledger(&mut buf, rows, options)?;
    Ok(String::from_utf8(buf)?)
}

/// Write the completion summary (with header) to `writer`: one row per
/// student and site, percent clamped to 100. Returns the number of data rows.
///
/// # Errors
///
/// Returns `TabularError` if writing fails.
pub fn write_completion<W: Write>(
    writer: W,
    report: &[CompletionReportRow],
    options: ExportOptions,
) -> Result<u64, TabularError> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    csv.write_record(COMPLETION_HEADER)?;

    let text = |value: &str| {
        if options.neutralize_formulas {
            neutralize_formula(value)
        } else {
            value.to_string()
        }
    };

    let mut written = 0u64;
    for row in report {
        for status in &row.sites {
            csv.write_record([
                row.student_id.clone(),
                text(&row.last_name),
                text(&row.initials),
                status.site_id.clone(),
                text(&status.site_name),
                status.total_hours.to_string(),
                status.required_hours.to_string(),
                status.owed_hours.to_string(),
                status.display_percent().to_string(),
            ])?;
            written += 1;
        }
    }
    csv.flush()?;
    tracing::debug!(rows = written, "wrote completion summary");
    Ok(written)
}

/// Render the completion summary into a string.
///
/// # Errors
///
/// Returns `TabularError` if CSV encoding fails.
pub fn completion_to_string(
    report: &[CompletionReportRow],
    options: ExportOptions,
) -> Result<String, TabularError> {
    let mut buf = Vec::new();
    write_completion(&mut buf, report, options)?;
    Ok(String::from_utf8(buf)?)
}

fn neutralize_formula(value: &str) -> String {
    let trimmed = value.trim_start();
    if matches!(trimmed.chars().next(), Some('=' | '+' | '-' | '@')) {
        format!("'{value}")
    } else {
        value.to_string()
    }
}
