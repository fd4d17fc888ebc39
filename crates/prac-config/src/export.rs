//! Ledger export configuration.

use serde::{Deserialize, Serialize};

const fn default_neutralize_formulas() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Prefix exported text starting with `= + - @` so spreadsheets treat it as text.
    #[serde(default = "default_neutralize_formulas")]
    pub neutralize_formulas: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            neutralize_formulas: default_neutralize_formulas(),
        }
    }
}
