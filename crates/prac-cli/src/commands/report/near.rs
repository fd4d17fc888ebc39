use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    threshold: Option<f64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let rows = ctx.service.near_completion(threshold).await?;
    if rows.is_empty() && !flags.quiet {
        tracing::info!(
            threshold = threshold.unwrap_or_else(|| ctx.service.threshold()),
            "no students near completion"
        );
    }
    output(&rows, flags.format)
}
