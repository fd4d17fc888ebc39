//! ID prefixes and key validation.
//!
//! Students are keyed by the institution's own student number, so keys come in
//! from users and spreadsheets and must be normalised before they touch the
//! store. Generated keys (sites without an explicit id, log entries) use a
//! short prefix followed by 8 hex characters, e.g. `log-a3f8b2c1`.

use crate::errors::CoreError;

pub const PREFIX_SITE: &str = "sit";
pub const PREFIX_LOG_ENTRY: &str = "log";

/// Every prefix handed to the store's ID generator.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_SITE, PREFIX_LOG_ENTRY];

/// Longest accepted caller-supplied key.
pub const MAX_KEY_LEN: usize = 64;

/// Normalise and validate a caller-supplied key (`student_id`, explicit `site_id`).
///
/// Trims surrounding whitespace and collapses spreadsheet float renderings of
/// whole numbers (`"1042.0"` becomes `"1042"`).
///
/// # Errors
///
/// Returns `CoreError::Validation` if the key is empty, too long, or contains
/// characters other than ASCII letters, digits, `-`, `_`, or `.`.
pub fn normalize_key(raw: &str, field: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(format!("{field} is required")));
    }

    let key = strip_float_suffix(trimmed);
    if key.len() > MAX_KEY_LEN {
        return Err(CoreError::validation(format!(
            "{field} '{key}' is longer than {MAX_KEY_LEN} characters"
        )));
    }
    if let Some(bad) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(CoreError::validation(format!(
            "{field} '{key}' contains invalid character {bad:?}"
        )));
    }
    Ok(key.to_string())
}

/// Require a non-empty display field (names). Returns the trimmed value.
///
/// # Errors
///
/// Returns `CoreError::Validation` when the value is blank.
pub fn require_text(raw: &str, field: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

fn strip_float_suffix(key: &str) -> &str {
    match key.split_once('.') {
        Some((whole, frac))
            if !whole.is_empty()
                && whole.chars().all(|c| c.is_ascii_digit())
                && !frac.is_empty()
                && frac.chars().all(|c| c == '0') =>
        {
            whole
        }
        _ => key,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("S001", "S001")]
    #[case("  S001 ", "S001")]
    #[case("1042.0", "1042")]
    #[case("1042.00", "1042")]
    #[case("v1.2", "v1.2")]
    #[case("site-a", "site-a")]
    #[case("abc_123", "abc_123")]
    fn accepts_valid_keys(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_key(raw, "student_id").unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("S 001")]
    #[case("S001,")]
    #[case("nan?")]
    #[case("ü123")]
    fn rejects_malformed_keys(#[case] raw: &str) {
        let err = normalize_key(raw, "student_id").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)), "{err}");
    }

    #[test]
    fn rejects_overlong_key() {
        let raw = "x".repeat(MAX_KEY_LEN + 1);
        assert!(normalize_key(&raw, "site_id").is_err());
    }

    #[test]
    fn validation_message_names_field() {
        let err = normalize_key("", "student_id").unwrap_err();
        assert!(err.to_string().contains("student_id is required"));
    }

    #[test]
    fn require_text_trims() {
        assert_eq!(require_text("  Smith ", "last_name").unwrap(), "Smith");
        assert!(require_text(" \t", "last_name").is_err());
    }
}
