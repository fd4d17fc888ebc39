use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    required_hours: f64,
    site_id: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let site = ctx
        .service
        .create_site(site_id, name, required_hours)
        .await?;
    output(&site, flags.format)
}
