//! # prac-config
//!
//! Layered configuration loading for PracTrack using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PRACTRACK_*` prefix, `__` as separator)
//! 2. Project-level `.practrack/config.toml`
//! 3. User-level `~/.config/practrack/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PRACTRACK_GENERAL__NEAR_COMPLETION_THRESHOLD` ->
//! `general.near_completion_threshold`, `PRACTRACK_STORE__PATH` -> `store.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use prac_config::PracConfig;
//!
//! let config = PracConfig::load_with_dotenv(None).expect("config");
//! println!("threshold: {}", config.general.near_completion_threshold);
//! ```

mod error;
mod export;
mod general;
mod store;

pub use error::ConfigError;
pub use export::ExportConfig;
pub use general::GeneralConfig;
pub use store::{DEFAULT_DB_FILE, PROJECT_DIR, StoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "PRACTRACK_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PracConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl PracConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `project_root` locates `.practrack/config.toml`; `None` looks in the
    /// current directory. Does NOT call `dotenvy`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the project root
    /// (or the current directory).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load_with_dotenv(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        match project_root.map(|root| root.join(".env")) {
            Some(path) if path.exists() => {
                let _ = dotenvy::from_path(&path);
            }
            _ => {
                let _ = dotenvy::dotenv();
            }
        }
        Self::load(project_root)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    #[must_use]
    pub fn figment(project_root: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = project_root
            .map_or_else(|| PathBuf::from(PROJECT_DIR), |root| root.join(PROJECT_DIR))
            .join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would make completion math or listing meaningless.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.general.near_completion_threshold;
        if !threshold.is_finite() || threshold <= 0.0 || threshold > 100.0 {
            return Err(ConfigError::InvalidValue {
                field: "general.near_completion_threshold".into(),
                reason: format!("must be in (0, 100], got {threshold}"),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("practrack").join("config.toml"))
    }
}
