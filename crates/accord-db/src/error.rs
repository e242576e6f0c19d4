//! Database error types for accord-db.

use accord_core::enums::EntityKind;
use accord_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// No row with the given id exists.
    #[error("{}", .kind.not_found_message(*.id))]
    NotFound { kind: EntityKind, id: i64 },

    /// Input was rejected before reaching SQL (validation, bad sort column).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A foreign key, unique, or check constraint rejected the write.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., an operation the resource does not support).
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
    /// Route a libSQL error to `Constraint` when SQLite rejected it on a constraint.
    #[must_use]
    pub fn classify(error: libsql::Error) -> Self {
        let msg = error.to_string();
        if msg.contains("constraint failed") {
            Self::Constraint(msg)
        } else {
            Self::LibSql(error)
        }
    }
}
