//! Flat table rows for completion statuses.

use prac_core::completion::CompletionStatus;
use prac_core::enums::CompletionBand;
use serde::Serialize;

/// One student/site cell of the completion matrix.
#[derive(Debug, Serialize)]
pub struct CompletionLine {
    pub student_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub site: String,
    pub total_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_hours: Option<f64>,
    /// Clamped to 100 and rounded to one decimal.
    pub percent: f64,
    pub owed_hours: f64,
    pub band: CompletionBand,
}

/// Lines for one student's statuses. `compact` drops the last name and
/// required-hours columns for narrow terminals.
pub fn completion_lines(
    student_id: &str,
    last_name: &str,
    sites: &[CompletionStatus],
    compact: bool,
) -> Vec<CompletionLine> {
    sites
        .iter()
        .map(|status| CompletionLine {
            student_id: student_id.to_string(),
            last_name: (!compact).then(|| last_name.to_string()),
            site: status.site_name.clone(),
            total_hours: status.total_hours,
            required_hours: (!compact).then_some(status.required_hours),
            percent: (status.display_percent() * 10.0).round() / 10.0,
            owed_hours: status.owed_hours,
            band: status.band,
        })
        .collect()
}
