mod add;
mod delete;
mod get;
mod list;
mod seed;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SiteCommands;
use crate::context::AppContext;

/// Handle `prac site`.
pub async fn handle(
    action: &SiteCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SiteCommands::Add {
            name,
            required_hours,
            id,
        } => add::run(name, *required_hours, id.as_deref(), ctx, flags).await,
        SiteCommands::Get { id } => get::run(id, ctx, flags).await,
        SiteCommands::Update {
            id,
            name,
            required_hours,
        } => update::run(id, name.as_deref(), *required_hours, ctx, flags).await,
        SiteCommands::Delete { id, cascade } => delete::run(id, *cascade, ctx, flags).await,
        SiteCommands::List => list::run(ctx, flags).await,
        SiteCommands::SeedDefaults => seed::run(ctx, flags).await,
    }
}
