mod delete;
mod export;
mod get;
mod list;
mod log;
mod summary;
mod update;

use prac_db::repos::ledger::LedgerFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{HoursCommands, LedgerFilterArgs};
use crate::commands::shared::parse::parse_optional_date;
use crate::context::AppContext;

/// Handle `prac hours`.
pub async fn handle(
    action: &HoursCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        HoursCommands::Log(args) => log::run(args, ctx, flags).await,
        HoursCommands::Get { id } => get::run(id, ctx, flags).await,
        HoursCommands::Update {
            id,
            student,
            site,
            date,
            hours,
            start,
            end,
            lecturer,
            notes,
        } => {
            let fields = update::UpdateFields {
                student: student.as_deref(),
                site: site.as_deref(),
                date: date.as_deref(),
                hours: *hours,
                start: start.as_deref(),
                end: end.as_deref(),
                lecturer: lecturer.as_deref(),
                notes: notes.as_deref(),
            };
            update::run(id, &fields, ctx, flags).await
        }
        HoursCommands::Delete { id } => delete::run(id, ctx, flags).await,
        HoursCommands::List(args) => list::run(args, ctx, flags).await,
        HoursCommands::Export { filter, output } => {
            export::run(filter, output.as_deref(), ctx, flags).await
        }
        HoursCommands::Summary { student, site } => {
            summary::run(student, site.as_deref(), ctx, flags).await
        }
    }
}

/// Turn filter flags into a store filter, resolving `--site` by id or name.
/// The limit is left to the caller.
async fn build_filter(args: &LedgerFilterArgs, ctx: &AppContext) -> anyhow::Result<LedgerFilter> {
    let from = parse_optional_date(args.from.as_deref(), "from")?;
    let to = parse_optional_date(args.to.as_deref(), "to")?;
    if let (Some(from), Some(to)) = (from, to)
        && from > to
    {
        anyhow::bail!("--from {from} is after --to {to}");
    }

    let mut filter = LedgerFilter::default().between(from, to);
    if let Some(student) = args.student.as_deref() {
        filter = filter.student(student);
    }
    if let Some(site) = args.site.as_deref() {
        let site = ctx.service.resolve_site(site).await?;
        filter = filter.site(site.site_id);
    }
    Ok(filter)
}
