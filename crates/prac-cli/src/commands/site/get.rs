use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id_or_name: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let site = ctx.service.resolve_site(id_or_name).await?;
    output(&site, flags.format)
}
