//! Local store configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory under the project root holding the store and project config.
pub const PROJECT_DIR: &str = ".practrack";

/// Store filename used when `store.path` is empty.
pub const DEFAULT_DB_FILE: &str = "practrack.db";

const fn default_seed_default_sites() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Database path. Empty means `<project>/.practrack/practrack.db`;
    /// relative paths resolve against the project root.
    #[serde(default)]
    pub path: String,

    /// Seed the default placement sites on `prac init`.
    #[serde(default = "default_seed_default_sites")]
    pub seed_default_sites: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            seed_default_sites: default_seed_default_sites(),
        }
    }
}

impl StoreConfig {
    /// Resolve the database path for a project rooted at `project_root`.
    #[must_use]
    pub fn resolve_db_path(&self, project_root: &Path) -> PathBuf {
        if self.path.is_empty() {
            return project_root.join(PROJECT_DIR).join(DEFAULT_DB_FILE);
        }
        let path = PathBuf::from(&self.path);
        if path.is_absolute() || self.is_in_memory() {
            path
        } else {
            project_root.join(path)
        }
    }

    /// Whether the configured store is an in-memory database.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}
