use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    tracing::debug!(project = %ctx.project_root.display(), ?command, "dispatching");
    match command {
        Commands::Student { action } => commands::student::handle(&action, ctx, flags).await,
        Commands::Site { action } => commands::site::handle(&action, ctx, flags).await,
        Commands::Hours { action } => commands::hours::handle(&action, ctx, flags).await,
        Commands::Report { action } => commands::report::handle(&action, ctx, flags).await,
        Commands::Overview => commands::overview::handle(ctx, flags).await,
        Commands::Reset(args) => commands::reset::handle(&args, ctx, flags).await,
        Commands::Init(_) | Commands::Schema(_) => {
            unreachable!("init/schema are pre-dispatched in main")
        }
    }
}
