use std::path::Path;

use prac_core::responses::CompletionReportRow;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::completion::{CompletionLine, completion_lines};
use crate::output::output;
use crate::ui;

fn flatten(report: &[CompletionReportRow], compact: bool) -> Vec<CompletionLine> {
    report
        .iter()
        .flat_map(|row| completion_lines(&row.student_id, &row.last_name, &row.sites, compact))
        .collect()
}

pub async fn run(
    destination: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Some(path) = destination {
        let response = ctx
            .service
            .export_completion_to_file(Path::new(path))
            .await?;
        return output(&response, flags.format);
    }

    let report = ctx.service.completion_report().await?;
    match flags.format {
        OutputFormat::Table => output(
            &flatten(&report, ui::prefs().compact_completion()),
            flags.format,
        ),
        OutputFormat::Json | OutputFormat::Raw => output(&report, flags.format),
    }
}
