use std::path::Path;

use prac_config::PracConfig;

/// Load `.env` from the project root (or the working directory), then the
/// layered configuration.
pub fn load_config(project_root: &Path) -> anyhow::Result<PracConfig> {
    let config = PracConfig::load_with_dotenv(Some(project_root))?;
    tracing::debug!(
        threshold = config.general.near_completion_threshold,
        default_limit = config.general.default_limit,
        "loaded configuration"
    );
    Ok(config)
}
