use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::hours::{hours_between, validate_hours};

/// One dated record of hours a student spent at a site.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LogEntry {
    pub entry_id: String,
    pub student_id: String,
    pub site_id: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub lecturer: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for a new log entry. Hours are either given directly or derived from
/// a start/end shift via [`NewLogEntry::from_shift`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewLogEntry {
    pub student_id: String,
    pub site_id: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub lecturer: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub notes: Option<String>,
}

impl NewLogEntry {
    /// Entry with an explicit hour count and no shift times.
    pub fn new(
        student_id: impl Into<String>,
        site_id: impl Into<String>,
        date: NaiveDate,
        hours: f64,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            site_id: site_id.into(),
            date,
            hours,
            lecturer: None,
            start_time: None,
            end_time: None,
            notes: None,
        }
    }

    /// Entry whose hours are computed from a start/end shift.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the shift has zero length.
    pub fn from_shift(
        student_id: impl Into<String>,
        site_id: impl Into<String>,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, CoreError> {
        let hours = hours_between(start, end);
        validate_hours(hours)?;
        Ok(Self {
            start_time: Some(start),
            end_time: Some(end),
            ..Self::new(student_id, site_id, date, hours)
        })
    }

    #[must_use]
    pub fn lecturer(mut self, lecturer: Option<String>) -> Self {
        self.lecturer = lecturer.filter(|s| !s.trim().is_empty());
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes.filter(|s| !s.trim().is_empty());
        self
    }
}

/// A log entry joined with its student and site, in export column order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LedgerRow {
    pub student_id: String,
    pub last_name: String,
    pub initials: String,
    pub site_id: String,
    pub site_name: String,
    pub date: NaiveDate,
    pub hours: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn from_shift_computes_hours() {
        let entry = NewLogEntry::from_shift("S001", "site-a", day(), at(9, 0), at(17, 30)).unwrap();
        assert!((entry.hours - 8.5).abs() < f64::EPSILON);
        assert_eq!(entry.start_time, Some(at(9, 0)));
        assert_eq!(entry.end_time, Some(at(17, 30)));
    }

    #[test]
    fn from_shift_rejects_zero_length() {
        let err = NewLogEntry::from_shift("S001", "site-a", day(), at(9, 0), at(9, 0)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn blank_optional_text_is_dropped() {
        let entry = NewLogEntry::new("S001", "site-a", day(), 2.0)
            .lecturer(Some("  ".into()))
            .notes(Some("ward round".into()));
        assert_eq!(entry.lecturer, None);
        assert_eq!(entry.notes.as_deref(), Some("ward round"));
    }
}
