//! Repository modules implementing the PracTrack store operations.
//!
//! Each module adds methods to `PracService` via `impl PracService` blocks.

pub mod completion;
pub mod ledger;
pub mod maintenance;
pub mod roster;
pub mod site;
pub mod student;

use libsql::params::IntoParams;
use prac_core::ids::normalize_key;

use crate::error::DatabaseError;
use crate::helpers::get_count;

/// Normalise a key used only for lookup. A malformed key cannot exist in the
/// store, so it falls back to a plain trim and simply misses.
pub(crate) fn lookup_key(raw: &str, field: &str) -> String {
    normalize_key(raw, field).unwrap_or_else(|_| raw.trim().to_string())
}

/// Run a `SELECT COUNT(*) ...` style query and return its first column.
pub(crate) async fn query_count(
    conn: &libsql::Connection,
    sql: &str,
    params: impl IntoParams,
) -> Result<u64, DatabaseError> {
    let mut rows = conn.query(sql, params).await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    get_count(&row, 0)
}
