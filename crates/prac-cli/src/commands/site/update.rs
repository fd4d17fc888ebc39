use prac_db::updates::site::SiteUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id_or_name: &str,
    name: Option<&str>,
    required_hours: Option<f64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if name.is_none() && required_hours.is_none() {
        anyhow::bail!("At least one of --name or --required-hours must be provided");
    }

    let site = ctx.service.resolve_site(id_or_name).await?;
    let mut builder = SiteUpdateBuilder::new();
    if let Some(name) = name {
        builder = builder.name(name);
    }
    if let Some(required_hours) = required_hours {
        builder = builder.required_hours(required_hours);
    }

    let updated = ctx
        .service
        .update_site(&site.site_id, builder.build())
        .await?;
    output(&updated, flags.format)
}
