mod completion;
mod near;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReportCommands;
use crate::context::AppContext;

/// Handle `prac report`.
pub async fn handle(
    action: &ReportCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReportCommands::Completion { output } => {
            completion::run(output.as_deref(), ctx, flags).await
        }
        ReportCommands::NearCompletion { threshold } => near::run(*threshold, ctx, flags).await,
    }
}
