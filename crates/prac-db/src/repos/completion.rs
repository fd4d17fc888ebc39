//! Derived completion views. Nothing here is stored: every status is
//! recomputed from the ledger and the sites' current required hours.

use std::path::Path;

use prac_core::completion::CompletionStatus;
use prac_core::enums::CompletionBand;
use prac_core::responses::{
    CompletionReportRow, ExportResponse, NearCompletionRow, Overview, StudentSummary,
};

use crate::error::DatabaseError;
use crate::helpers::get_count;
use crate::service::PracService;

impl PracService {
    /// Completion per site for one student, covering only sites the student
    /// has logged hours at. Ordered by site name.
    ///
    /// # Errors
    ///
    /// `NotFound` when the student is absent.
    pub async fn student_summary(&self, student_id: &str) -> Result<StudentSummary, DatabaseError> {
        let student = self.get_student(student_id).await?;
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT si.site_id, si.name, si.required_hours, SUM(e.hours)
                 FROM log_entries e
                 JOIN sites si ON si.site_id = e.site_id
                 WHERE e.student_id = ?1
                 GROUP BY si.site_id, si.name, si.required_hours
                 ORDER BY si.name COLLATE NOCASE",
                [student.student_id.as_str()],
            )
            .await?;

        let threshold = self.threshold();
        let mut sites = Vec::new();
        while let Some(row) = rows.next().await? {
            sites.push(CompletionStatus::compute(
                row.get::<String>(0)?,
                row.get::<String>(1)?,
                row.get::<f64>(3)?,
                row.get::<f64>(2)?,
                threshold,
            ));
        }
        Ok(StudentSummary { student, sites })
    }

    /// Completion of one student at one site, including sites with no hours.
    ///
    /// # Errors
    ///
    /// `NotFound` when either the student or the site is absent.
    pub async fn completion_for(
        &self,
        student_id: &str,
        site_id: &str,
    ) -> Result<CompletionStatus, DatabaseError> {
        let student = self.get_student(student_id).await?;
        let site = self.get_site(site_id).await?;
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COALESCE(SUM(hours), 0.0) FROM log_entries
                 WHERE student_id = ?1 AND site_id = ?2",
                [student.student_id.as_str(), site.site_id.as_str()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(CompletionStatus::compute(
            site.site_id,
            site.name,
            row.get::<f64>(0)?,
            site.required_hours,
            self.threshold(),
        ))
    }

    /// Every student against every site: totals, requirement, owed hours and
    /// percentage. Students ordered by last name, sites by name.
    pub async fn completion_report(&self) -> Result<Vec<CompletionReportRow>, DatabaseError> {
        self.completion_matrix(self.threshold()).await
    }

    /// The completion report as CSV text, one row per student and site.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query or CSV encoding fails.
    pub async fn export_completion(&self) -> Result<String, DatabaseError> {
        let report = self.completion_report().await?;
        Ok(prac_tabular::completion_to_string(
            &report,
            self.settings().export,
        )?)
    }

    /// Write the completion report to a CSV file, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the file cannot be written.
    pub async fn export_completion_to_file(
        &self,
        path: &Path,
    ) -> Result<ExportResponse, DatabaseError> {
        let report = self.completion_report().await?;
        let file = std::fs::File::create(path).map_err(prac_tabular::TabularError::from)?;
        let written = prac_tabular::write_completion(file, &report, self.settings().export)?;
        tracing::info!(rows = written, path = %path.display(), "exported completion summary");
        Ok(ExportResponse {
            path: path.display().to_string(),
            rows: written,
        })
    }

    /// Student/site pairs at or past `threshold` (the configured one when
    /// `None`) that have not yet reached 100%.
    ///
    /// # Errors
    ///
    /// `Validation` when the threshold is outside `(0, 100]`.
    pub async fn near_completion(
        &self,
        threshold: Option<f64>,
    ) -> Result<Vec<NearCompletionRow>, DatabaseError> {
        let threshold = threshold.unwrap_or_else(|| self.threshold());
        if !(threshold > 0.0 && threshold <= 100.0) {
            return Err(DatabaseError::Validation(format!(
                "near-completion threshold must be in (0, 100], got {threshold}"
            )));
        }

        let matrix = self.completion_matrix(threshold).await?;
        let near = matrix
            .into_iter()
            .flat_map(|row| {
                let CompletionReportRow {
                    student_id,
                    last_name,
                    initials,
                    sites,
                } = row;
                sites
                    .into_iter()
                    .filter(|status| status.band == CompletionBand::NearCompletion)
                    .map(move |status| NearCompletionRow {
                        student_id: student_id.clone(),
                        last_name: last_name.clone(),
                        initials: initials.clone(),
                        status,
                    })
            })
            .collect();
        Ok(near)
    }

    /// Headline counts for the home screen.
    pub async fn overview(&self) -> Result<Overview, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT
                    (SELECT COUNT(*) FROM students),
                    (SELECT COUNT(*) FROM sites),
                    (SELECT COUNT(*) FROM log_entries),
                    (SELECT COALESCE(SUM(hours), 0.0) FROM log_entries)",
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(Overview {
            students: get_count(&row, 0)?,
            sites: get_count(&row, 1)?,
            log_entries: get_count(&row, 2)?,
            total_hours: prac_core::hours::round2(row.get::<f64>(3)?),
        })
    }

    async fn completion_matrix(
        &self,
        threshold: f64,
    ) -> Result<Vec<CompletionReportRow>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT st.student_id, st.last_name, st.initials,
                        si.site_id, si.name, si.required_hours,
                        COALESCE(SUM(e.hours), 0.0)
                 FROM students st
                 CROSS JOIN sites si
                 LEFT JOIN log_entries e
                   ON e.student_id = st.student_id AND e.site_id = si.site_id
                 GROUP BY st.student_id, si.site_id
                 ORDER BY st.last_name COLLATE NOCASE, st.student_id, si.name COLLATE NOCASE",
                (),
            )
            .await?;

        let mut report: Vec<CompletionReportRow> = Vec::new();
        while let Some(row) = rows.next().await? {
            let student_id = row.get::<String>(0)?;
            let status = CompletionStatus::compute(
                row.get::<String>(3)?,
                row.get::<String>(4)?,
                row.get::<f64>(6)?,
                row.get::<f64>(5)?,
                threshold,
            );
            match report.last_mut() {
                Some(last) if last.student_id == student_id => last.sites.push(status),
                _ => report.push(CompletionReportRow {
                    student_id,
                    last_name: row.get::<String>(1)?,
                    initials: row.get::<String>(2)?,
                    sites: vec![status],
                }),
            }
        }
        tracing::debug!(students = report.len(), threshold, "built completion matrix");
        Ok(report)
    }
}
