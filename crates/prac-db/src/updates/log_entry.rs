//! Log entry update builder.
//!
//! Nullable text columns use `Option<Option<String>>`: the outer `Some` means
//! "change it", the inner `None` clears the column.

use chrono::{NaiveDate, NaiveTime};
use prac_core::errors::CoreError;
use prac_core::hours::{hours_between, validate_hours};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct LogEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lecturer: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Option<NaiveTime>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Option<NaiveTime>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

impl LogEntryUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.student_id.is_none()
            && self.site_id.is_none()
            && self.date.is_none()
            && self.hours.is_none()
            && self.lecturer.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.notes.is_none()
    }
}

#[derive(Default)]
pub struct LogEntryUpdateBuilder(LogEntryUpdate);

impl LogEntryUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn student_id(mut self, val: impl Into<String>) -> Self {
        self.0.student_id = Some(val.into());
        self
    }

    #[must_use]
    pub fn site_id(mut self, val: impl Into<String>) -> Self {
        self.0.site_id = Some(val.into());
        self
    }

    #[must_use]
    pub fn date(mut self, val: NaiveDate) -> Self {
        self.0.date = Some(val);
        self
    }

    /// Set hours directly. Clears any recorded shift times, which would no
    /// longer agree with the new value.
    #[must_use]
    pub fn hours(mut self, val: f64) -> Self {
        self.0.hours = Some(val);
        self.0.start_time = Some(None);
        self.0.end_time = Some(None);
        self
    }

    /// Set the shift boundaries and derive hours from them.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the shift has zero length.
    pub fn shift(mut self, start: NaiveTime, end: NaiveTime) -> Result<Self, CoreError> {
        let hours = validate_hours(hours_between(start, end))?;
        self.0.hours = Some(hours);
        self.0.start_time = Some(Some(start));
        self.0.end_time = Some(Some(end));
        Ok(self)
    }

    #[must_use]
    pub fn lecturer(mut self, val: Option<String>) -> Self {
        self.0.lecturer = Some(val.filter(|s| !s.trim().is_empty()));
        self
    }

    #[must_use]
    pub fn notes(mut self, val: Option<String>) -> Self {
        self.0.notes = Some(val.filter(|s| !s.trim().is_empty()));
        self
    }

    #[must_use]
    pub fn build(self) -> LogEntryUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_is_empty() {
        assert!(LogEntryUpdateBuilder::new().build().is_empty());
    }

    #[test]
    fn shift_sets_hours_and_times() {
        let start = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        let end = NaiveTime::from_hms_opt(6, 30, 0).unwrap();
        let update = LogEntryUpdateBuilder::new().shift(start, end).unwrap().build();
        assert_eq!(update.hours, Some(8.5));
        assert_eq!(update.start_time, Some(Some(start)));
        assert_eq!(update.end_time, Some(Some(end)));
    }

    #[test]
    fn direct_hours_clear_shift() {
        let update = LogEntryUpdateBuilder::new().hours(3.0).build();
        assert_eq!(update.start_time, Some(None));
        assert_eq!(update.end_time, Some(None));
    }

    #[test]
    fn serializes_changed_fields_only() {
        let update = LogEntryUpdateBuilder::new()
            .notes(Some("night shift".into()))
            .build();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "notes": "night shift" }));
    }
}
