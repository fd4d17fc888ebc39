use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `prac overview`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let overview = ctx.service.overview().await?;
    output(&overview, flags.format)
}
