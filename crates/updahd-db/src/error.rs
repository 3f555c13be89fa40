//! Database error types for updahd-db.

use thiserror::Error;
use updahd_core::errors::CoreError;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A single-entity lookup or targeted write matched no row.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Input rejected before reaching SQL.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<CoreError> for DatabaseError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(msg) => Self::Validation(msg),
            CoreError::NotFound { entity_type, id } => Self::InvalidState(format!(
                "{entity_type} {id} disappeared during the operation"
            )),
            CoreError::Other(inner) => Self::Other(inner),
        }
    }
}
