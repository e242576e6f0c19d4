//! Invoice repository.

use accord_core::entities::{Invoice, InvoiceInput};
use accord_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::helpers::{
    date_value, get_date, get_opt_json, get_opt_string, opt_integer, opt_json, opt_text,
};
use crate::resource::{Parent, Resource};

impl Resource for Invoice {
    type Input = InvoiceInput;

    const KIND: EntityKind = EntityKind::Invoice;
    const COLUMNS: &'static [&'static str] = &[
        "invoice_number",
        "vendor_id",
        "sow_id",
        "amount",
        "invoice_date",
        "payment_status",
        "document",
        "metadata",
    ];
    const SEARCH_COLUMNS: &'static [&'static str] = &["invoice_number", "payment_status"];
    const PARENT: Option<Parent> = Some(Parent {
        column: "sow_id",
        kind: EntityKind::Sow,
    });

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get(0)?,
            invoice_number: row.get(1)?,
            vendor_id: row.get(2)?,
            sow_id: row.get::<Option<i64>>(3)?,
            amount: row.get(4)?,
            invoice_date: get_date(row, 5)?,
            payment_status: row.get(6)?,
            document: get_opt_string(row, 7)?,
            metadata: get_opt_json(row, 8)?,
        })
    }

    fn bind(input: &InvoiceInput) -> Result<Vec<libsql::Value>, DatabaseError> {
        Ok(vec![
            libsql::Value::Text(input.invoice_number.clone()),
            libsql::Value::Integer(input.vendor_id),
            opt_integer(input.sow_id),
            libsql::Value::Real(input.amount),
            date_value(input.invoice_date),
            libsql::Value::Text(input.payment_status.clone()),
            opt_text(input.document.as_deref()),
            opt_json(input.metadata.as_ref())?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use accord_core::query::ListQuery;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{seed_invoice, seed_msa, seed_sow, seed_vendor, test_service};

    #[tokio::test]
    async fn invoice_without_sow() {
        let svc = test_service().await;
        let vendor = seed_vendor(&svc, "Contoso").await;

        let invoice = seed_invoice(&svc, vendor.id, None, "INV-0001").await;
        let fetched = svc.get::<Invoice>(invoice.id).await.unwrap();
        assert_eq!(fetched.sow_id, None);
        assert_eq!(fetched.amount, 1000.0);
    }

    #[tokio::test]
    async fn search_by_payment_status() {
        let svc = test_service().await;
        let vendor = seed_vendor(&svc, "Contoso").await;
        seed_invoice(&svc, vendor.id, None, "INV-1").await;
        let paid = seed_invoice(&svc, vendor.id, None, "INV-2").await;
        svc.update::<Invoice>(
            paid.id,
            &InvoiceInput {
                invoice_number: paid.invoice_number.clone(),
                vendor_id: vendor.id,
                sow_id: None,
                amount: paid.amount,
                invoice_date: paid.invoice_date,
                payment_status: "Paid".into(),
                document: None,
                metadata: None,
            },
        )
        .await
        .unwrap();

        let page = svc
            .list::<Invoice>(&ListQuery::default().with_search("paid"))
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].invoice_number, "INV-2");
    }

    #[tokio::test]
    async fn invoices_listed_under_their_sow() {
        let svc = test_service().await;
        let vendor = seed_vendor(&svc, "Contoso").await;
        let msa = seed_msa(&svc, vendor.id, "Umbrella").await;
        let sow = seed_sow(&svc, msa.id, "Phase 1").await;
        seed_invoice(&svc, vendor.id, Some(sow.id), "INV-A").await;
        seed_invoice(&svc, vendor.id, None, "INV-B").await;

        let page = svc
            .list_by_parent::<Invoice>(sow.id, &ListQuery::default())
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].invoice_number, "INV-A");
    }
}
