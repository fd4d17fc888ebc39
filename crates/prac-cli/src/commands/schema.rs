use schemars::schema_for;
use serde_json::Value;

use prac_core::completion::CompletionStatus;
use prac_core::entities::{LedgerRow, LogEntry, Site, Student};
use prac_core::responses::{
    CompletionReportRow, DeleteResponse, ExportResponse, ImportSummary, NearCompletionRow,
    Overview, ResetResponse, StudentSummary,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Type names accepted by `prac schema`.
pub const SCHEMA_NAMES: &[&str] = &[
    "student",
    "site",
    "log_entry",
    "ledger_row",
    "completion_status",
    "student_summary",
    "completion_report_row",
    "near_completion_row",
    "import_summary",
    "overview",
    "delete_response",
    "reset_response",
    "export_response",
];

/// JSON Schema for a named type, or `None` if the name is unknown.
pub fn schema_for_name(name: &str) -> anyhow::Result<Option<Value>> {
    let schema = match name.replace('-', "_").as_str() {
        "student" => schema_for!(Student),
        "site" => schema_for!(Site),
        "log_entry" => schema_for!(LogEntry),
        "ledger_row" => schema_for!(LedgerRow),
        "completion_status" => schema_for!(CompletionStatus),
        "student_summary" => schema_for!(StudentSummary),
        "completion_report_row" => schema_for!(CompletionReportRow),
        "near_completion_row" => schema_for!(NearCompletionRow),
        "import_summary" => schema_for!(ImportSummary),
        "overview" => schema_for!(Overview),
        "delete_response" => schema_for!(DeleteResponse),
        "reset_response" => schema_for!(ResetResponse),
        "export_response" => schema_for!(ExportResponse),
        _ => return Ok(None),
    };
    Ok(Some(serde_json::to_value(schema)?))
}

/// Handle `prac schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(schema) = schema_for_name(&args.type_name)? else {
        anyhow::bail!(
            "unknown schema type '{}'; expected one of: {}",
            args.type_name,
            SCHEMA_NAMES.join(", ")
        );
    };
    output(&schema, flags.format)
}
