//! Deliverable repository.

use accord_core::entities::{Deliverable, DeliverableInput};
use accord_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_date, get_opt_json, opt_date, opt_json, opt_real};
use crate::resource::{Parent, Resource};

impl Resource for Deliverable {
    type Input = DeliverableInput;

    const KIND: EntityKind = EntityKind::Deliverable;
    const COLUMNS: &'static [&'static str] = &[
        "milestone_id",
        "description",
        "amount",
        "status",
        "due_date",
        "metadata",
    ];
    const SEARCH_COLUMNS: &'static [&'static str] = &["description", "status"];
    const PARENT: Option<Parent> = Some(Parent {
        column: "milestone_id",
        kind: EntityKind::Milestone,
    });

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get(0)?,
            milestone_id: row.get(1)?,
            description: row.get(2)?,
            amount: row.get::<Option<f64>>(3)?,
            status: row.get(4)?,
            due_date: get_opt_date(row, 5)?,
            metadata: get_opt_json(row, 6)?,
        })
    }

    fn bind(input: &DeliverableInput) -> Result<Vec<libsql::Value>, DatabaseError> {
        Ok(vec![
            libsql::Value::Integer(input.milestone_id),
            libsql::Value::Text(input.description.clone()),
            opt_real(input.amount),
            libsql::Value::Text(input.status.clone()),
            opt_date(input.due_date),
            opt_json(input.metadata.as_ref())?,
        ])
    }
}
