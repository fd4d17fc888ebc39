//! Hour arithmetic for log entries.

use chrono::NaiveTime;

use crate::errors::CoreError;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Hours between two wall-clock times, rounded to 2 decimals.
///
/// An end time earlier than the start is treated as a shift that runs past
/// midnight. Equal times yield `0.0`.
#[must_use]
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    let mut seconds = (end - start).num_seconds();
    if seconds < 0 {
        seconds += SECONDS_PER_DAY;
    }
    #[allow(clippy::cast_precision_loss)]
    round2(seconds as f64 / 3600.0)
}

/// Round to 2 decimal places (the precision hours are reported at).
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Check that a logged hour count is finite and strictly positive.
///
/// # Errors
///
/// Returns `CoreError::Validation` otherwise.
pub fn validate_hours(hours: f64) -> Result<f64, CoreError> {
    if !hours.is_finite() || hours <= 0.0 {
        return Err(CoreError::validation(format!(
            "hours must be a positive number, got {hours}"
        )));
    }
    Ok(hours)
}

/// Check that a site's required hours are finite and not negative.
///
/// # Errors
///
/// Returns `CoreError::Validation` otherwise.
pub fn validate_required_hours(hours: f64) -> Result<f64, CoreError> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(CoreError::validation(format!(
            "required_hours must be zero or more, got {hours}"
        )));
    }
    Ok(hours)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[rstest]
    #[case(t(9, 0), t(17, 0), 8.0)]
    #[case(t(9, 0), t(9, 20), 0.33)]
    #[case(t(22, 0), t(6, 0), 8.0)]
    #[case(t(23, 45), t(0, 15), 0.5)]
    #[case(t(8, 0), t(8, 0), 0.0)]
    fn computes_shift_length(#[case] start: NaiveTime, #[case] end: NaiveTime, #[case] expected: f64) {
        assert!((hours_between(start, end) - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_non_positive_hours(#[case] hours: f64) {
        assert!(validate_hours(hours).is_err());
    }

    #[test]
    fn required_hours_may_be_zero() {
        assert_eq!(validate_required_hours(0.0).unwrap(), 0.0);
        assert!(validate_required_hours(-0.5).is_err());
    }
}
