//! MSA repository. These are the records behind the list/delete page.

use accord_core::entities::{Msa, MsaInput};
use accord_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::helpers::{
    date_value, get_date, get_opt_date, get_opt_json, get_opt_string, opt_date, opt_json, opt_text,
};
use crate::resource::{Parent, Resource};

impl Resource for Msa {
    type Input = MsaInput;

    const KIND: EntityKind = EntityKind::Msa;
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "vendor_id",
        "start_date",
        "end_date",
        "document",
        "metadata",
    ];
    const SEARCH_COLUMNS: &'static [&'static str] = &["title", "document"];
    const PARENT: Option<Parent> = Some(Parent {
        column: "vendor_id",
        kind: EntityKind::Vendor,
    });

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            vendor_id: row.get(2)?,
            start_date: get_date(row, 3)?,
            end_date: get_opt_date(row, 4)?,
            document: get_opt_string(row, 5)?,
            metadata: get_opt_json(row, 6)?,
        })
    }

    fn bind(input: &MsaInput) -> Result<Vec<libsql::Value>, DatabaseError> {
        Ok(vec![
            libsql::Value::Text(input.title.clone()),
            libsql::Value::Integer(input.vendor_id),
            date_value(input.start_date),
            opt_date(input.end_date),
            opt_text(input.document.as_deref()),
            opt_json(input.metadata.as_ref())?,
        ])
    }
}
