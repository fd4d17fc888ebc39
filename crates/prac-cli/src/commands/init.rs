use std::path::PathBuf;

use anyhow::Context;
use prac_config::PROJECT_DIR;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitResponse {
    project_root: String,
    db_path: String,
    default_sites_added: u64,
}

/// Handle `prac init`.
pub async fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project_root = match flags.project.as_deref() {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    if !project_root.is_dir() {
        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            project_root.display()
        );
    }

    let project_dir = project_root.join(PROJECT_DIR);
    std::fs::create_dir_all(&project_dir)
        .with_context(|| format!("failed to create {}", project_dir.display()))?;

    let config = bootstrap::load_config(&project_root)?;
    let db_path = config.store.resolve_db_path(&project_root);
    let seed = config.store.seed_default_sites && !args.no_default_sites;
    let ctx = AppContext::init(project_root, config).await?;

    let default_sites_added = if seed {
        ctx.service.seed_default_sites().await?
    } else {
        0
    };
    tracing::info!(root = %ctx.project_root.display(), default_sites_added, "initialized project");

    output(
        &InitResponse {
            project_root: ctx.project_root.display().to_string(),
            db_path: db_path.display().to_string(),
            default_sites_added,
        },
        flags.format,
    )
}
