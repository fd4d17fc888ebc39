//! Roster import: bulk student registration from a parsed class list.

use std::path::Path;

use chrono::Utc;

use prac_core::responses::{ImportSummary, RejectedRow};
use prac_tabular::{RowOutcome, TabularError};

use crate::error::DatabaseError;
use crate::service::PracService;

/// File-level roster problems (empty file, wrong header, sheetless
/// workbook) are input errors.
fn roster_error(error: TabularError) -> DatabaseError {
    match error {
        TabularError::Empty { .. } | TabularError::Header { .. } | TabularError::NoSheets => {
            DatabaseError::Validation(error.to_string())
        }
        other => other.into(),
    }
}

impl PracService {
    /// Insert every valid row whose `student_id` is not yet on the roster.
    ///
    /// Existing students are never overwritten; repeats (in the store or
    /// earlier in the same file) count as skipped duplicates. Runs in a single
    /// transaction, so a storage failure leaves the roster untouched.
    pub async fn import_roster(&self, rows: &[RowOutcome]) -> Result<ImportSummary, DatabaseError> {
        let now = Utc::now().to_rfc3339();
        let tx = self.db().conn().transaction().await?;
        let mut summary = ImportSummary::default();

        for outcome in rows {
            match outcome {
                RowOutcome::Invalid { line, reason } => {
                    summary.rejected.push(RejectedRow {
                        line: *line,
                        reason: reason.clone(),
                    });
                }
                RowOutcome::Valid(row) => {
                    let inserted = tx
                        .execute(
                            "INSERT OR IGNORE INTO students
                                (student_id, last_name, initials, created_at, updated_at)
                             VALUES (?1, ?2, ?3, ?4, ?5)",
                            libsql::params![
                                row.student_id.as_str(),
                                row.last_name.as_str(),
                                row.initials.as_str(),
                                now.as_str(),
                                now.as_str()
                            ],
                        )
                        .await?;
                    if inserted == 0 {
                        tracing::debug!(line = row.line, student_id = %row.student_id, "duplicate roster row");
                        summary.skipped_duplicates += 1;
                        summary.skipped_ids.push(row.student_id.clone());
                    } else {
                        summary.imported += 1;
                    }
                }
            }
        }

        tx.commit().await?;
        tracing::info!(
            imported = summary.imported,
            skipped = summary.skipped_duplicates,
            rejected = summary.rejected.len(),
            "imported roster"
        );
        Ok(summary)
    }

    /// Parse and import a roster CSV file.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty file or a wrong header; `Tabular` when the
    /// file cannot be read.
    pub async fn import_roster_file(&self, path: &Path) -> Result<ImportSummary, DatabaseError> {
        let rows = prac_tabular::parse_roster_file(path).map_err(roster_error)?;
        self.import_roster(&rows).await
    }

    /// Parse and import roster CSV held in memory. Workbooks are file-only.
    ///
    /// # Errors
    ///
    /// `Validation` for empty input or a wrong header.
    pub async fn import_roster_text(&self, text: &str) -> Result<ImportSummary, DatabaseError> {
        let rows = prac_tabular::parse_roster(text.as_bytes()).map_err(roster_error)?;
        self.import_roster(&rows).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::test_service;

    #[tokio::test]
    async fn duplicate_id_in_one_file_is_skipped() {
        let svc = test_service().await;
        let summary = svc
            .import_roster_text("last_name,initials,student_id\nSmith,J,S001\nSmith,J,S001\n")
            .await
            .unwrap();
        assert_eq!(summary.imported, 1);
        assert_eq!(summary.skipped_duplicates, 1);
        assert_eq!(summary.skipped_ids, vec!["S001".to_string()]);
        assert_eq!(svc.list_students(None, 50).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn existing_students_are_not_overwritten() {
        let svc = test_service().await;
        svc.create_student("S001", "Smith", "J").await.unwrap();
        let summary = svc
            .import_roster_text("last_name,initials,student_id\nSmythe,K,S001\n")
            .await
            .unwrap();
        assert_eq!(summary.imported, 0);
        assert_eq!(svc.get_student("S001").await.unwrap().last_name, "Smith");
    }

    #[tokio::test]
    async fn invalid_rows_are_reported_not_fatal() {
        let svc = test_service().await;
        let summary = svc
            .import_roster_text("last_name,initials,student_id\n,J,S001\nJones,K,\nLee,M,S003\n")
            .await
            .unwrap();
        assert_eq!(summary.imported, 1);
        let lines: Vec<_> = summary.rejected.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![2, 3]);
    }

    #[tokio::test]
    async fn wrong_header_is_validation_error() {
        let svc = test_service().await;
        let err = svc
            .import_roster_text("student_id,last_name,initials\nS001,Smith,J\n")
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));

        let empty = svc.import_roster_text("").await.unwrap_err();
        assert!(matches!(empty, DatabaseError::Validation(_)));
    }

    #[tokio::test]
    async fn import_is_idempotent() {
        let svc = test_service().await;
        let text = "last_name,initials,student_id\nSmith,J,S001\nAdams,K,S002\n";
        let first = svc.import_roster_text(text).await.unwrap();
        let before = svc.list_students(None, 50).await.unwrap();
        let second = svc.import_roster_text(text).await.unwrap();
        let after = svc.list_students(None, 50).await.unwrap();

        assert_eq!(first.imported, 2);
        assert_eq!(second.imported, 0);
        assert_eq!(second.skipped_duplicates, 2);
        assert_eq!(before, after);
    }
}
