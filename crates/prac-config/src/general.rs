//! General application configuration.

use prac_core::completion::DEFAULT_NEAR_COMPLETION_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Default result limit for list commands.
const fn default_limit() -> u32 {
    50
}

const fn default_threshold() -> f64 {
    DEFAULT_NEAR_COMPLETION_THRESHOLD
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Percentage at or above which a student counts as near completion.
    #[serde(default = "default_threshold")]
    pub near_completion_threshold: f64,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            near_completion_threshold: default_threshold(),
            default_limit: default_limit(),
        }
    }
}
