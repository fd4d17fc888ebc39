use chrono::{NaiveDate, NaiveTime};
use prac_core::enums::DeletePolicy;

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}

/// Parse an optional date argument.
pub fn parse_optional_date(raw: Option<&str>, field: &str) -> anyhow::Result<Option<NaiveDate>> {
    raw.map(|value| parse_date(value, field)).transpose()
}

/// Parse an `HH:MM` or `HH:MM:SS` time-of-day argument.
pub fn parse_time(raw: &str, field: &str) -> anyhow::Result<NaiveTime> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected HH:MM): {error}"))
}

/// Today's date in the local timezone.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Map a `--cascade` flag onto the store's delete policy.
#[must_use]
pub const fn delete_policy(cascade: bool) -> DeletePolicy {
    if cascade {
        DeletePolicy::Cascade
    } else {
        DeletePolicy::Restrict
    }
}
