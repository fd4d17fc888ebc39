mod add;
mod delete;
mod get;
mod import;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudentCommands;
use crate::context::AppContext;

/// Handle `prac student`.
pub async fn handle(
    action: &StudentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StudentCommands::Add {
            student_id,
            last_name,
            initials,
        } => add::run(student_id, last_name, initials, ctx, flags).await,
        StudentCommands::Get { id } => get::run(id, ctx, flags).await,
        StudentCommands::Update {
            id,
            last_name,
            initials,
        } => update::run(id, last_name.as_deref(), initials.as_deref(), ctx, flags).await,
        StudentCommands::Delete { id, cascade } => delete::run(id, *cascade, ctx, flags).await,
        StudentCommands::List { search, limit } => {
            list::run(search.as_deref(), *limit, ctx, flags).await
        }
        StudentCommands::Import { file } => import::run(file, ctx, flags).await,
    }
}
