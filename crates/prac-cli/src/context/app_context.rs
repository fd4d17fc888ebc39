use std::path::PathBuf;

use anyhow::Context;
use prac_config::PracConfig;
use prac_db::service::{PracService, ServiceSettings};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: PracService,
    pub config: PracConfig,
    pub project_root: PathBuf,
}

impl AppContext {
    /// Open the store configured for `project_root`.
    pub async fn init(project_root: PathBuf, config: PracConfig) -> anyhow::Result<Self> {
        let db_path = config.store.resolve_db_path(&project_root);
        if !config.store.is_in_memory()
            && let Some(parent) = db_path.parent()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let db_path_str = db_path.to_string_lossy();
        tracing::debug!(path = %db_path_str, "opening store");
        let service =
            PracService::new_local(&db_path_str, ServiceSettings::from_config(&config)).await?;

        Ok(Self {
            service,
            config,
            project_root,
        })
    }
}
