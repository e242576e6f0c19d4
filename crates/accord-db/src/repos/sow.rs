//! SOW repository.

use accord_core::entities::{Sow, SowInput};
use accord_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::helpers::{
    get_opt_date, get_opt_json, get_opt_string, opt_date, opt_json, opt_real, opt_text,
};
use crate::resource::{Parent, Resource};

impl Resource for Sow {
    type Input = SowInput;

    const KIND: EntityKind = EntityKind::Sow;
    const COLUMNS: &'static [&'static str] = &[
        "msa_id",
        "title",
        "start_date",
        "end_date",
        "budget",
        "document",
        "metadata",
    ];
    const SEARCH_COLUMNS: &'static [&'static str] = &["title", "document"];
    const PARENT: Option<Parent> = Some(Parent {
        column: "msa_id",
        kind: EntityKind::Msa,
    });

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get(0)?,
            msa_id: row.get(1)?,
            title: row.get(2)?,
            start_date: get_opt_date(row, 3)?,
            end_date: get_opt_date(row, 4)?,
            budget: row.get::<Option<f64>>(5)?,
            document: get_opt_string(row, 6)?,
            metadata: get_opt_json(row, 7)?,
        })
    }

    fn bind(input: &SowInput) -> Result<Vec<libsql::Value>, DatabaseError> {
        Ok(vec![
            libsql::Value::Integer(input.msa_id),
            libsql::Value::Text(input.title.clone()),
            opt_date(input.start_date),
            opt_date(input.end_date),
            opt_real(input.budget),
            opt_text(input.document.as_deref()),
            opt_json(input.metadata.as_ref())?,
        ])
    }
}
