//! Milestone repository.

use accord_core::entities::{Milestone, MilestoneInput};
use accord_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_date, get_opt_json, opt_date, opt_json};
use crate::resource::{Parent, Resource};

impl Resource for Milestone {
    type Input = MilestoneInput;

    const KIND: EntityKind = EntityKind::Milestone;
    const COLUMNS: &'static [&'static str] = &["sow_id", "name", "status", "due_date", "metadata"];
    const SEARCH_COLUMNS: &'static [&'static str] = &["name", "status"];
    const PARENT: Option<Parent> = Some(Parent {
        column: "sow_id",
        kind: EntityKind::Sow,
    });

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get(0)?,
            sow_id: row.get(1)?,
            name: row.get(2)?,
            status: row.get(3)?,
            due_date: get_opt_date(row, 4)?,
            metadata: get_opt_json(row, 5)?,
        })
    }

    fn bind(input: &MilestoneInput) -> Result<Vec<libsql::Value>, DatabaseError> {
        Ok(vec![
            libsql::Value::Integer(input.sow_id),
            libsql::Value::Text(input.name.clone()),
            libsql::Value::Text(input.status.clone()),
            opt_date(input.due_date),
            opt_json(input.metadata.as_ref())?,
        ])
    }
}
