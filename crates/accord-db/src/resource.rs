//! The table contract every stored entity implements.
//!
//! A `Resource` describes one table: its columns in a fixed order, which of
//! them are searchable, which foreign key (if any) makes it a child of another
//! resource, and how to convert between rows and the entity/input types.
//! `AccordService` builds every SQL statement from these descriptions.

use accord_core::enums::EntityKind;
use accord_core::validate::Validate;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::DatabaseError;

/// The foreign key linking a child resource to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parent {
    pub column: &'static str,
    pub kind: EntityKind,
}

pub trait Resource: Serialize + DeserializeOwned + Send + Sync + Sized + 'static {
    /// Create / full-replacement payload.
    type Input: Validate + Serialize + DeserializeOwned + Send + Sync + 'static;

    const KIND: EntityKind;

    /// Writable columns, excluding `id`.
    ///
    /// `bind` must produce values in this order and `from_row` reads them in
    /// this order starting at index 1 (index 0 is `id`).
    const COLUMNS: &'static [&'static str];

    /// Text columns matched by the `search` parameter.
    const SEARCH_COLUMNS: &'static [&'static str];

    /// Set for resources listed under a parent (e.g. SOWs under an MSA).
    const PARENT: Option<Parent> = None;

    /// # Errors
    ///
    /// Returns `DatabaseError` if a column is missing or malformed.
    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError>;

    /// # Errors
    ///
    /// Returns `DatabaseError` if a value cannot be encoded (e.g. metadata JSON).
    fn bind(input: &Self::Input) -> Result<Vec<libsql::Value>, DatabaseError>;

    /// `id` plus every writable column except the JSON metadata.
    fn is_sortable(column: &str) -> bool {
        column == "id" || (column != "metadata" && Self::COLUMNS.contains(&column))
    }

    /// `id, col1, col2, ...`
    fn select_columns() -> String {
        let mut cols = String::from("id");
        for col in Self::COLUMNS {
            cols.push_str(", ");
            cols.push_str(col);
        }
        cols
    }
}
