use std::path::Path;

use prac_core::responses::ImportSummary;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ImportReport {
    file: String,
    rows_seen: usize,
    #[serde(flatten)]
    summary: ImportSummary,
}

pub async fn run(file: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = Path::new(file);
    if !path.is_file() {
        anyhow::bail!("roster file '{}' does not exist", path.display());
    }

    let summary = ctx.service.import_roster_file(path).await?;
    for rejected in &summary.rejected {
        tracing::warn!(line = rejected.line, reason = %rejected.reason, "rejected roster row");
    }
    let report = ImportReport {
        file: path.display().to_string(),
        rows_seen: summary.rows_seen(),
        summary,
    };
    output(&report, flags.format)
}
