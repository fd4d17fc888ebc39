//! Service layer holding the store handle and read-time settings.
//!
//! `PracService` wraps `PracDb` (raw database access) plus the settings that
//! shape derived reads: the near-completion threshold and export options.
//! All repo methods are implemented as `impl PracService` blocks.

use prac_config::PracConfig;
use prac_core::completion::DEFAULT_NEAR_COMPLETION_THRESHOLD;
use prac_tabular::ExportOptions;

use crate::PracDb;
use crate::error::DatabaseError;

/// Settings applied on read, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceSettings {
    /// Percentage at or above which a student/site pair counts as near completion.
    pub near_completion_threshold: f64,
    pub export: ExportOptions,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            near_completion_threshold: DEFAULT_NEAR_COMPLETION_THRESHOLD,
            export: ExportOptions::default(),
        }
    }
}

impl ServiceSettings {
    #[must_use]
    pub const fn from_config(config: &PracConfig) -> Self {
        Self {
            near_completion_threshold: config.general.near_completion_threshold,
            export: ExportOptions {
                neutralize_formulas: config.export.neutralize_formulas,
            },
        }
    }
}

/// Explicit store handle passed to every roster, site and ledger operation.
pub struct PracService {
    db: PracDb,
    settings: ServiceSettings,
}

impl PracService {
    /// Open (or create) a local store.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    /// * `settings` - Read-time settings, usually [`ServiceSettings::from_config`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(
        db_path: &str,
        settings: ServiceSettings,
    ) -> Result<Self, DatabaseError> {
        let db = PracDb::open_local(db_path).await?;
        Ok(Self::from_db(db, settings))
    }

    /// Wrap an already-opened database.
    #[must_use]
    pub const fn from_db(db: PracDb, settings: ServiceSettings) -> Self {
        Self { db, settings }
    }

    /// Access the underlying database.
    #[must_use]
    pub const fn db(&self) -> &PracDb {
        &self.db
    }

    #[must_use]
    pub const fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.settings.near_completion_threshold
    }
}
