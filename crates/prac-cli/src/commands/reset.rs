use prac_core::enums::SiteRetention;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResetArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `prac reset`.
pub async fn handle(args: &ResetArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sites = args.site_retention();
    if !args.yes {
        let scope = match sites {
            SiteRetention::KeepAll => "",
            SiteRetention::KeepDefaults => " and custom site",
            SiteRetention::RemoveAll => " and site",
        };
        anyhow::bail!("reset deletes every student and log entry{scope}; re-run with --yes to confirm");
    }
    let response = ctx.service.reset_data(sites).await?;
    output(&response, flags.format)
}
