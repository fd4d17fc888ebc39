//! Enums shared across PracTrack crates.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for SQL storage and messages.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// The three stored entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Student,
    Site,
    LogEntry,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Site => "site",
            Self::LogEntry => "log_entry",
        }
    }

    /// Table backing this entity.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Student => "students",
            Self::Site => "sites",
            Self::LogEntry => "log_entries",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CompletionBand
// ---------------------------------------------------------------------------

/// Where a student stands against a site's required hours.
///
/// ```text
/// not_started → in_progress → near_completion → complete
/// ```
///
/// `near_completion` starts at the configured threshold (90% by default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CompletionBand {
    NotStarted,
    InProgress,
    NearCompletion,
    Complete,
}

impl CompletionBand {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::NearCompletion => "near_completion",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for CompletionBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DeletePolicy
// ---------------------------------------------------------------------------

/// What to do with dependent log entries when a student or site is deleted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    /// Refuse the delete while any log entry references the row.
    #[default]
    Restrict,
    /// Remove dependent log entries together with the row.
    Cascade,
}

impl DeletePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Restrict => "restrict",
            Self::Cascade => "cascade",
        }
    }
}

impl fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SiteRetention
// ---------------------------------------------------------------------------

/// Which sites survive a store reset.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SiteRetention {
    /// Keep the four standard sites and delete custom ones.
    #[default]
    KeepDefaults,
    /// Keep every site.
    KeepAll,
    /// Delete every site.
    RemoveAll,
}

impl SiteRetention {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KeepDefaults => "keep_defaults",
            Self::KeepAll => "keep_all",
            Self::RemoveAll => "remove_all",
        }
    }
}

impl fmt::Display for SiteRetention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_matches_as_str() {
        for band in [
            CompletionBand::NotStarted,
            CompletionBand::InProgress,
            CompletionBand::NearCompletion,
            CompletionBand::Complete,
        ] {
            let json = serde_json::to_string(&band).unwrap();
            assert_eq!(json, format!("\"{}\"", band.as_str()));
        }
        for entity in [EntityType::Student, EntityType::Site, EntityType::LogEntry] {
            let json = serde_json::to_string(&entity).unwrap();
            assert_eq!(json, format!("\"{entity}\""));
        }
    }

    #[test]
    fn delete_policy_defaults_to_restrict() {
        assert_eq!(DeletePolicy::default(), DeletePolicy::Restrict);
    }

    #[test]
    fn reset_keeps_standard_sites_by_default() {
        assert_eq!(SiteRetention::default(), SiteRetention::KeepDefaults);
        let json = serde_json::to_string(&SiteRetention::RemoveAll).unwrap();
        assert_eq!(json, "\"remove_all\"");
    }
}
