//! Excel workbook reading on calamine.
//!
//! Cells come back as trimmed text. Whole-number floats render without a
//! fraction, since spreadsheets store numeric student ids as `f64`.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};

use crate::error::TabularError;

/// First sheet of a workbook as text rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SheetText {
    pub name: String,
    /// `(1-based worksheet row, cells)`, in sheet order.
    pub rows: Vec<(u64, Vec<String>)>,
}

pub(crate) fn read_first_sheet(path: &Path) -> Result<SheetText, TabularError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(TabularError::NoSheets)?;
    let range = workbook.worksheet_range(&name)?;

    let first_row = range.start().map_or(0, |(row, _)| u64::from(row));
    let rows = range
        .rows()
        .enumerate()
        .map(|(idx, cells)| {
            let line = first_row + idx as u64 + 1;
            (line, cells.iter().map(cell_text).collect())
        })
        .collect();

    Ok(SheetText { name, rows })
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        #[allow(clippy::cast_possible_truncation)]
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (*f as i64).to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::Error(err) => format!("#{err:?}"),
        Data::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::numeric_id(Data::Float(2_024_117.0), "2024117")]
    #[case::fractional(Data::Float(7.5), "7.5")]
    #[case::integer(Data::Int(1042), "1042")]
    #[case::padded_text(Data::String("  Smith ".into()), "Smith")]
    #[case::blank(Data::Empty, "")]
    fn renders_cells_as_text(#[case] cell: Data, #[case] expected: &str) {
        assert_eq!(cell_text(&cell), expected);
    }
}
