//! Vendor repository.

use accord_core::entities::{Vendor, VendorInput};
use accord_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_json, get_opt_string, opt_json, opt_text};
use crate::resource::Resource;

impl Resource for Vendor {
    type Input = VendorInput;

    const KIND: EntityKind = EntityKind::Vendor;
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "address",
        "contact_name",
        "contact_email",
        "contact_phone",
        "contact_type",
        "website",
        "metadata",
    ];
    const SEARCH_COLUMNS: &'static [&'static str] = &[
        "name",
        "address",
        "contact_name",
        "contact_email",
        "contact_phone",
        "contact_type",
    ];

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            address: get_opt_string(row, 2)?,
            contact_name: get_opt_string(row, 3)?,
            contact_email: get_opt_string(row, 4)?,
            contact_phone: get_opt_string(row, 5)?,
            contact_type: get_opt_string(row, 6)?,
            website: get_opt_string(row, 7)?,
            metadata: get_opt_json(row, 8)?,
        })
    }

    fn bind(input: &VendorInput) -> Result<Vec<libsql::Value>, DatabaseError> {
        Ok(vec![
            libsql::Value::Text(input.name.clone()),
            opt_text(input.address.as_deref()),
            opt_text(input.contact_name.as_deref()),
            opt_text(input.contact_email.as_deref()),
            opt_text(input.contact_phone.as_deref()),
            opt_text(input.contact_type.as_deref()),
            opt_text(input.website.as_deref()),
            opt_json(input.metadata.as_ref())?,
        ])
    }
}
