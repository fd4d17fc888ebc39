use prac_core::entities::NewLogEntry;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LogArgs;
use crate::commands::shared::parse::{parse_date, parse_time, today};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &LogArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let site = ctx.service.resolve_site(&args.site).await?;
    let date = match args.date.as_deref() {
        Some(raw) => parse_date(raw, "date")?,
        None => today(),
    };

    let entry = match (args.hours, args.start.as_deref(), args.end.as_deref()) {
        (Some(hours), None, None) => NewLogEntry::new(&args.student, site.site_id, date, hours),
        (None, Some(start), Some(end)) => NewLogEntry::from_shift(
            &args.student,
            site.site_id,
            date,
            parse_time(start, "start")?,
            parse_time(end, "end")?,
        )?,
        _ => anyhow::bail!("Provide either --hours or both --start and --end"),
    };
    let entry = entry
        .lecturer(args.lecturer.clone())
        .notes(args.notes.clone());

    let created = ctx.service.create_entry(entry).await?;
    output(&created, flags.format)
}
