//! Hour ledger: dated log entries, filtered listing, and CSV export.

use std::path::Path;

use chrono::{NaiveDate, Utc};

use prac_core::entities::{LedgerRow, LogEntry, NewLogEntry};
use prac_core::enums::EntityType;
use prac_core::hours::validate_hours;
use prac_core::ids::PREFIX_LOG_ENTRY;
use prac_core::responses::{DeleteResponse, ExportResponse};

use crate::error::DatabaseError;
use crate::helpers::{
    format_date, format_time, get_opt_string, parse_date, parse_datetime, parse_optional_time,
};
use crate::repos::lookup_key;
use crate::service::PracService;
use crate::updates::log_entry::LogEntryUpdate;

const SELECT_COLS: &str = "e.entry_id, e.student_id, e.site_id, e.date, e.hours, e.lecturer, \
                           e.start_time, e.end_time, e.notes, e.created_at, e.updated_at";

const LEDGER_COLS: &str =
    "e.student_id, st.last_name, st.initials, e.site_id, si.name, e.date, e.hours";

const LEDGER_JOIN: &str = "FROM log_entries e
     JOIN students st ON st.student_id = e.student_id
     JOIN sites si ON si.site_id = e.site_id";

/// Narrows ledger listings and exports. Every bound is optional; date bounds
/// are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerFilter {
    pub student_id: Option<String>,
    pub site_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl LedgerFilter {
    #[must_use]
    pub fn student(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }

    #[must_use]
    pub fn site(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }

    #[must_use]
    pub const fn between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render the WHERE/ORDER/LIMIT tail shared by listing and export.
    fn to_sql(&self) -> (String, Vec<libsql::Value>) {
        let mut conds = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref id) = self.student_id {
            conds.push(format!("e.student_id = ?{idx}"));
            params.push(lookup_key(id, "student_id").into());
            idx += 1;
        }
        if let Some(ref id) = self.site_id {
            conds.push(format!("e.site_id = ?{idx}"));
            params.push(lookup_key(id, "site_id").into());
            idx += 1;
        }
        if let Some(from) = self.from {
            conds.push(format!("e.date >= ?{idx}"));
            params.push(format_date(from).into());
            idx += 1;
        }
        if let Some(to) = self.to {
            conds.push(format!("e.date <= ?{idx}"));
            params.push(format_date(to).into());
            idx += 1;
        }

        let mut sql = String::new();
        if !conds.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conds.join(" AND "));
        }
        sql.push_str(" ORDER BY e.date DESC, st.last_name COLLATE NOCASE, e.student_id, e.created_at");
        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT ?{idx}"));
            params.push(i64::from(limit).into());
        }
        (sql, params)
    }
}

fn row_to_entry(row: &libsql::Row) -> Result<LogEntry, DatabaseError> {
    Ok(LogEntry {
        entry_id: row.get::<String>(0)?,
        student_id: row.get::<String>(1)?,
        site_id: row.get::<String>(2)?,
        date: parse_date(&row.get::<String>(3)?)?,
        hours: row.get::<f64>(4)?,
        lecturer: get_opt_string(row, 5)?,
        start_time: parse_optional_time(get_opt_string(row, 6)?.as_deref())?,
        end_time: parse_optional_time(get_opt_string(row, 7)?.as_deref())?,
        notes: get_opt_string(row, 8)?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
        updated_at: parse_datetime(&row.get::<String>(10)?)?,
    })
}

fn row_to_ledger_row(row: &libsql::Row) -> Result<LedgerRow, DatabaseError> {
    Ok(LedgerRow {
        student_id: row.get::<String>(0)?,
        last_name: row.get::<String>(1)?,
        initials: row.get::<String>(2)?,
        site_id: row.get::<String>(3)?,
        site_name: row.get::<String>(4)?,
        date: parse_date(&row.get::<String>(5)?)?,
        hours: row.get::<f64>(6)?,
    })
}

impl PracService {
    /// Resolve a student reference for a ledger write. Unknown students are a
    /// validation failure here, not a missing target.
    async fn ledger_student_ref(&self, raw: &str) -> Result<String, DatabaseError> {
        let id = lookup_key(raw, "student_id");
        if !self.student_exists(&id).await? {
            return Err(DatabaseError::Validation(format!("unknown student '{id}'")));
        }
        Ok(id)
    }

    async fn ledger_site_ref(&self, raw: &str) -> Result<String, DatabaseError> {
        let id = lookup_key(raw, "site_id");
        if !self.site_id_taken(&id).await? {
            return Err(DatabaseError::Validation(format!("unknown site '{id}'")));
        }
        Ok(id)
    }

    /// Record hours a student spent at a site.
    ///
    /// # Errors
    ///
    /// `Validation` when the student or site does not exist, or hours are not
    /// a positive finite number.
    pub async fn create_entry(&self, entry: NewLogEntry) -> Result<LogEntry, DatabaseError> {
        let hours = validate_hours(entry.hours)?;
        let student_id = self.ledger_student_ref(&entry.student_id).await?;
        let site_id = self.ledger_site_ref(&entry.site_id).await?;

        let now = Utc::now();
        let entry_id = self.db().generate_id(PREFIX_LOG_ENTRY).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO log_entries (entry_id, student_id, site_id, date, hours, lecturer,
                                          start_time, end_time, notes, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                libsql::params![
                    entry_id.as_str(),
                    student_id.as_str(),
                    site_id.as_str(),
                    format_date(entry.date),
                    hours,
                    entry.lecturer.as_deref(),
                    entry.start_time.map(format_time),
                    entry.end_time.map(format_time),
                    entry.notes.as_deref(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;
        tracing::info!(%entry_id, %student_id, %site_id, hours, "logged hours");

        Ok(LogEntry {
            entry_id,
            student_id,
            site_id,
            date: entry.date,
            hours,
            lecturer: entry.lecturer,
            start_time: entry.start_time,
            end_time: entry.end_time,
            notes: entry.notes,
            created_at: now,
            updated_at: now,
        })
    }

    /// # Errors
    ///
    /// `NotFound` when no entry has this id.
    pub async fn get_entry(&self, entry_id: &str) -> Result<LogEntry, DatabaseError> {
        let entry_id = entry_id.trim();
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM log_entries e WHERE e.entry_id = ?1"),
                [entry_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => row_to_entry(&row),
            None => Err(DatabaseError::not_found(EntityType::LogEntry, entry_id)),
        }
    }

    /// Change fields of a log entry.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id; `Validation` for unknown references or
    /// invalid hours.
    pub async fn update_entry(
        &self,
        entry_id: &str,
        update: LogEntryUpdate,
    ) -> Result<LogEntry, DatabaseError> {
        let entry_id = entry_id.trim();
        if update.is_empty() {
            return self.get_entry(entry_id).await;
        }
        // Missing targets take precedence over reference errors.
        self.get_entry(entry_id).await?;

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref student_id) = update.student_id {
            let student_id = self.ledger_student_ref(student_id).await?;
            sets.push(format!("student_id = ?{idx}"));
            params.push(student_id.into());
            idx += 1;
        }
        if let Some(ref site_id) = update.site_id {
            let site_id = self.ledger_site_ref(site_id).await?;
            sets.push(format!("site_id = ?{idx}"));
            params.push(site_id.into());
            idx += 1;
        }
        if let Some(date) = update.date {
            sets.push(format!("date = ?{idx}"));
            params.push(format_date(date).into());
            idx += 1;
        }
        if let Some(hours) = update.hours {
            let hours = validate_hours(hours)?;
            sets.push(format!("hours = ?{idx}"));
            params.push(hours.into());
            idx += 1;
        }
        if let Some(ref lecturer) = update.lecturer {
            sets.push(format!("lecturer = ?{idx}"));
            params.push(lecturer.as_deref().into());
            idx += 1;
        }
        if let Some(start_time) = update.start_time {
            sets.push(format!("start_time = ?{idx}"));
            params.push(start_time.map(format_time).into());
            idx += 1;
        }
        if let Some(end_time) = update.end_time {
            sets.push(format!("end_time = ?{idx}"));
            params.push(end_time.map(format_time).into());
            idx += 1;
        }
        if let Some(ref notes) = update.notes {
            sets.push(format!("notes = ?{idx}"));
            params.push(notes.as_deref().into());
            idx += 1;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        params.push(entry_id.into());
        let sql = format!(
            "UPDATE log_entries SET {} WHERE entry_id = ?{idx}",
            sets.join(", ")
        );
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        tracing::info!(entry_id, "updated log entry");

        self.get_entry(entry_id).await
    }

    /// # Errors
    ///
    /// `NotFound` when no entry has this id.
    pub async fn delete_entry(&self, entry_id: &str) -> Result<DeleteResponse, DatabaseError> {
        let entry_id = entry_id.trim();
        let removed = self
            .db()
            .conn()
            .execute("DELETE FROM log_entries WHERE entry_id = ?1", [entry_id])
            .await?;
        if removed == 0 {
            return Err(DatabaseError::not_found(EntityType::LogEntry, entry_id));
        }
        tracing::info!(entry_id, "deleted log entry");

        Ok(DeleteResponse {
            entity: EntityType::LogEntry,
            id: entry_id.to_string(),
            removed_entries: removed,
        })
    }

    /// Log entries matching `filter`, newest date first, then by last name.
    pub async fn list_entries(&self, filter: &LedgerFilter) -> Result<Vec<LogEntry>, DatabaseError> {
        let (tail, params) = filter.to_sql();
        let sql = format!(
            "SELECT {SELECT_COLS} FROM log_entries e
             JOIN students st ON st.student_id = e.student_id{tail}"
        );
        tracing::debug!(%sql, "listing log entries");
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }
        Ok(entries)
    }

    /// Entries matching `filter` joined with student and site names, in the
    /// same order as [`Self::list_entries`].
    pub async fn ledger_rows(&self, filter: &LedgerFilter) -> Result<Vec<LedgerRow>, DatabaseError> {
        let (tail, params) = filter.to_sql();
        let sql = format!("SELECT {LEDGER_COLS} {LEDGER_JOIN}{tail}");
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut ledger = Vec::new();
        while let Some(row) = rows.next().await? {
            ledger.push(row_to_ledger_row(&row)?);
        }
        Ok(ledger)
    }

    /// Export matching entries as CSV text with the fixed ledger header.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query or CSV encoding fails.
    pub async fn export_entries(&self, filter: &LedgerFilter) -> Result<String, DatabaseError> {
        let rows = self.ledger_rows(filter).await?;
        let csv = prac_tabular::ledger_to_string(&rows, self.settings().export)?;
        tracing::info!(rows = rows.len(), "exported ledger");
        Ok(csv)
    }

    /// Export matching entries to a CSV file, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the file cannot be written.
    pub async fn export_entries_to_file(
        &self,
        filter: &LedgerFilter,
        path: &Path,
    ) -> Result<ExportResponse, DatabaseError> {
        let rows = self.ledger_rows(filter).await?;
        let file = std::fs::File::create(path).map_err(prac_tabular::TabularError::from)?;
        let written = prac_tabular::write_ledger(file, &rows, self.settings().export)?;
        tracing::info!(rows = written, path = %path.display(), "exported ledger");
        Ok(ExportResponse {
            path: path.display().to_string(),
            rows: written,
        })
    }
}
