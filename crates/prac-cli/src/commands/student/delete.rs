use crate::cli::GlobalFlags;
use crate::commands::shared::parse::delete_policy;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    cascade: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = ctx
        .service
        .delete_student(id, delete_policy(cascade))
        .await?;
    output(&response, flags.format)
}
