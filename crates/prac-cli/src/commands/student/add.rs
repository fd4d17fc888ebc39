use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    student_id: &str,
    last_name: &str,
    initials: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let student = ctx
        .service
        .create_student(student_id, last_name, initials)
        .await?;
    output(&student, flags.format)
}
