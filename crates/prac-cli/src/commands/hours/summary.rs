use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::completion::completion_lines;
use crate::output::output;
use crate::ui;

/// Per-site completion for one student. With `site`, only that site is
/// reported, even when the student has no hours there yet.
pub async fn run(
    student_id: &str,
    site: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut summary = ctx.service.student_summary(student_id).await?;
    if let Some(site) = site {
        let site = ctx.service.resolve_site(site).await?;
        let status = ctx
            .service
            .completion_for(&summary.student.student_id, &site.site_id)
            .await?;
        summary.sites = vec![status];
    }

    if flags.format != OutputFormat::Table {
        return output(&summary, flags.format);
    }

    if !flags.quiet {
        println!(
            "{} ({})",
            summary.student.display_name(),
            summary.student.student_id
        );
    }
    let lines = completion_lines(
        &summary.student.student_id,
        &summary.student.last_name,
        &summary.sites,
        ui::prefs().compact_completion(),
    );
    output(&lines, flags.format)
}
