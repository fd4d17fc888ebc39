use std::path::Path;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LedgerFilterArgs;
use crate::context::AppContext;
use crate::output::output;

/// Export is unbounded unless `--limit` is given on the subcommand itself.
pub async fn run(
    args: &LedgerFilterArgs,
    destination: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut filter = super::build_filter(args, ctx).await?;
    if let Some(limit) = args.limit {
        filter = filter.limit(limit);
    }

    match destination {
        Some(path) => {
            let response = ctx
                .service
                .export_entries_to_file(&filter, Path::new(path))
                .await?;
            output(&response, flags.format)
        }
        None => {
            let csv = ctx.service.export_entries(&filter).await?;
            print!("{csv}");
            Ok(())
        }
    }
}
