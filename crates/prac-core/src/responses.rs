//! CLI response types returned as JSON by `prac` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::completion::CompletionStatus;
use crate::entities::Student;
use crate::enums::EntityType;

/// A roster row that failed validation and was not imported.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based line number in the source file (the header is line 1).
    pub line: u64,
    pub reason: String,
}

/// Response from `prac student import`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: u32,
    pub skipped_duplicates: u32,
    pub rejected: Vec<RejectedRow>,
    /// Student IDs that were skipped because they were already on the roster.
    pub skipped_ids: Vec<String>,
}

impl ImportSummary {
    /// Total data rows seen in the file.
    #[must_use]
    pub fn rows_seen(&self) -> usize {
        self.imported as usize + self.skipped_duplicates as usize + self.rejected.len()
    }
}

/// Response from `prac hours summary`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StudentSummary {
    pub student: Student,
    pub sites: Vec<CompletionStatus>,
}

/// One student's row in the full completion report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CompletionReportRow {
    pub student_id: String,
    pub last_name: String,
    pub initials: String,
    pub sites: Vec<CompletionStatus>,
}

/// A (student, site) pair past the near-completion threshold but not done.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NearCompletionRow {
    pub student_id: String,
    pub last_name: String,
    pub initials: String,
    #[serde(flatten)]
    pub status: CompletionStatus,
}

/// Response from `prac overview`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Overview {
    pub students: u64,
    pub sites: u64,
    pub log_entries: u64,
    pub total_hours: f64,
}

/// Response from `prac student delete` / `prac site delete` / `prac hours delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub entity: EntityType,
    pub id: String,
    /// Log entries removed along with the row (cascade only).
    pub removed_entries: u64,
}

/// Response from `prac reset`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResetResponse {
    pub students_removed: u64,
    pub sites_removed: u64,
    pub entries_removed: u64,
}

/// Response from `prac hours export` when writing to a file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportResponse {
    pub path: String,
    pub rows: u64,
}
