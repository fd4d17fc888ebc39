use prac_db::updates::student::StudentUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    last_name: Option<&str>,
    initials: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if last_name.is_none() && initials.is_none() {
        anyhow::bail!("At least one of --last-name or --initials must be provided");
    }

    let mut builder = StudentUpdateBuilder::new();
    if let Some(last_name) = last_name {
        builder = builder.last_name(last_name);
    }
    if let Some(initials) = initials {
        builder = builder.initials(initials);
    }

    let student = ctx.service.update_student(id, builder.build()).await?;
    output(&student, flags.format)
}
