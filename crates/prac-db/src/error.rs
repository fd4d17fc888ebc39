//! Database error types for prac-db.

use prac_core::enums::EntityType;
use prac_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The target row of a get/update/delete does not exist.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Input failed validation: malformed field, dangling reference,
    /// duplicate key, or a delete blocked by dependent rows.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A SQL query failed or returned unparseable data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Roster or export file problem.
    #[error(transparent)]
    Tabular(#[from] prac_tabular::TabularError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    pub(crate) fn not_found(entity: EntityType, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity.as_str().to_string(),
            id: id.to_string(),
        }
    }

    /// Whether this error is the caller's fault (bad input or missing target)
    /// rather than a storage failure.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Validation(_))
    }
}

impl From<CoreError> for DatabaseError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
            CoreError::Validation(message) => Self::Validation(message),
            CoreError::Other(error) => Self::Other(error),
        }
    }
}
