use crate::cli::GlobalFlags;
use crate::cli::subcommands::LedgerFilterArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &LedgerFilterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(args.limit, flags.limit, ctx.config.general.default_limit);
    let filter = super::build_filter(args, ctx).await?.limit(limit);
    let entries = ctx.service.list_entries(&filter).await?;
    output(&entries, flags.format)
}
