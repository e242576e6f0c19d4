//! Cross-cutting error types for Accord.
//!
//! Storage errors (`DatabaseError`), HTTP errors (`ApiError`) and client errors
//! (`ClientError`) live in their own crates and wrap `CoreError` where needed.

use thiserror::Error;

/// Errors that can be raised by any Accord crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation before reaching storage.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A sort expression named a column the resource cannot be ordered by.
    #[error("Invalid sort column '{column}' for {resource}")]
    InvalidSort { resource: String, column: String },

    /// A route segment or name did not match any known resource.
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
