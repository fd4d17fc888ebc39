use crate::cli::GlobalFlags;
use crate::commands::shared::parse::delete_policy;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id_or_name: &str,
    cascade: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let site = ctx.service.resolve_site(id_or_name).await?;
    let response = ctx
        .service
        .delete_site(&site.site_id, delete_policy(cascade))
        .await?;
    output(&response, flags.format)
}
