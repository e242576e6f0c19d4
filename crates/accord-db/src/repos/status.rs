//! Status lookup repository.

use accord_core::entities::{Status, StatusInput};
use accord_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_json, get_opt_string, opt_json, opt_text};
use crate::resource::Resource;

impl Resource for Status {
    type Input = StatusInput;

    const KIND: EntityKind = EntityKind::Status;
    const COLUMNS: &'static [&'static str] = &["name", "description", "metadata"];
    const SEARCH_COLUMNS: &'static [&'static str] = &["name", "description"];

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            description: get_opt_string(row, 2)?,
            metadata: get_opt_json(row, 3)?,
        })
    }

    fn bind(input: &StatusInput) -> Result<Vec<libsql::Value>, DatabaseError> {
        Ok(vec![
            libsql::Value::Text(input.name.clone()),
            opt_text(input.description.as_deref()),
            opt_json(input.metadata.as_ref())?,
        ])
    }
}
