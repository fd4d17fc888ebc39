//! Completion status: logged hours measured against a site's requirement.
//!
//! Nothing here is stored. Every read recomputes from the current log entries
//! and the site's current `required_hours`, so editing a requirement shifts
//! every student's percentage immediately.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CompletionBand;
use crate::hours::round2;

/// Default near-completion threshold, in percent.
pub const DEFAULT_NEAR_COMPLETION_THRESHOLD: f64 = 90.0;

/// One student's standing at one site.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CompletionStatus {
    pub site_id: String,
    pub site_name: String,
    pub total_hours: f64,
    pub required_hours: f64,
    /// `100 × total / required`, unclamped. A site with no requirement reads 100.
    pub percent: f64,
    pub owed_hours: f64,
    pub near_completion: bool,
    pub complete: bool,
    pub band: CompletionBand,
}

impl CompletionStatus {
    /// Compute the status for `total_hours` logged against `required_hours`.
    #[must_use]
    pub fn compute(
        site_id: impl Into<String>,
        site_name: impl Into<String>,
        total_hours: f64,
        required_hours: f64,
        threshold: f64,
    ) -> Self {
        let ratio = raw_percent(total_hours, required_hours);
        let complete = ratio >= 100.0;
        let near_completion = ratio >= threshold;
        let band = if complete {
            CompletionBand::Complete
        } else if near_completion {
            CompletionBand::NearCompletion
        } else if total_hours > 0.0 {
            CompletionBand::InProgress
        } else {
            CompletionBand::NotStarted
        };

        Self {
            site_id: site_id.into(),
            site_name: site_name.into(),
            total_hours: round2(total_hours),
            required_hours,
            percent: round2(ratio),
            owed_hours: owed_hours(total_hours, required_hours),
            near_completion,
            complete,
            band,
        }
    }

    /// Percentage clamped to 100 for display.
    #[must_use]
    pub fn display_percent(&self) -> f64 {
        self.percent.min(100.0)
    }
}

/// `100 × total / required`, rounded to 2 decimals. Zero required reads as 100.
#[must_use]
pub fn completion_percent(total_hours: f64, required_hours: f64) -> f64 {
    round2(raw_percent(total_hours, required_hours))
}

/// Flags compare against this, never the rounded figure.
fn raw_percent(total_hours: f64, required_hours: f64) -> f64 {
    if required_hours <= 0.0 {
        return 100.0;
    }
    100.0 * total_hours / required_hours
}

/// Hours still owed. A shortfall never rounds away to zero.
fn owed_hours(total_hours: f64, required_hours: f64) -> f64 {
    let owed = (required_hours - total_hours).max(0.0);
    if owed > 0.0 {
        round2(owed).max(0.01)
    } else {
        0.0
    }
}
