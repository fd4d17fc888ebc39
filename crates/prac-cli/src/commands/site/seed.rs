use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SeedResponse {
    added: u64,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let added = ctx.service.seed_default_sites().await?;
    output(&SeedResponse { added }, flags.format)
}
