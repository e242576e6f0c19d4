//! Shared fixtures for accord-db tests.

use accord_core::entities::{
    Deliverable, DeliverableInput, Invoice, InvoiceInput, Milestone, MilestoneInput, Msa,
    MsaInput, Sow, SowInput, Vendor, VendorInput,
};
use chrono::NaiveDate;

use crate::AccordDb;
use crate::service::{AccordService, PageLimits};

/// In-memory service with default paging limits.
pub async fn test_service() -> AccordService {
    let db = AccordDb::open_local(":memory:").await.unwrap();
    AccordService::new(db, PageLimits::default())
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub async fn seed_vendor(svc: &AccordService, name: &str) -> Vendor {
    svc.create::<Vendor>(&VendorInput {
        name: name.to_string(),
        ..VendorInput::default()
    })
    .await
    .unwrap()
}

pub async fn seed_msa(svc: &AccordService, vendor_id: i64, title: &str) -> Msa {
    svc.create::<Msa>(&MsaInput {
        title: title.to_string(),
        vendor_id,
        start_date: date("2024-01-01"),
        end_date: None,
        document: None,
        metadata: None,
    })
    .await
    .unwrap()
}

pub async fn seed_sow(svc: &AccordService, msa_id: i64, title: &str) -> Sow {
    svc.create::<Sow>(&SowInput {
        msa_id,
        title: title.to_string(),
        start_date: None,
        end_date: None,
        budget: None,
        document: None,
        metadata: None,
    })
    .await
    .unwrap()
}

pub async fn seed_milestone(svc: &AccordService, sow_id: i64, name: &str) -> Milestone {
    svc.create::<Milestone>(&MilestoneInput {
        sow_id,
        name: name.to_string(),
        status: "planned".to_string(),
        due_date: None,
        metadata: None,
    })
    .await
    .unwrap()
}

pub async fn seed_deliverable(
    svc: &AccordService,
    milestone_id: i64,
    description: &str,
) -> Deliverable {
    svc.create::<Deliverable>(&DeliverableInput {
        milestone_id,
        description: description.to_string(),
        amount: None,
        status: "pending".to_string(),
        due_date: None,
        metadata: None,
    })
    .await
    .unwrap()
}

pub async fn seed_invoice(
    svc: &AccordService,
    vendor_id: i64,
    sow_id: Option<i64>,
    number: &str,
) -> Invoice {
    svc.create::<Invoice>(&InvoiceInput {
        invoice_number: number.to_string(),
        vendor_id,
        sow_id,
        amount: 1000.0,
        invoice_date: date("2024-03-01"),
        payment_status: "pending".to_string(),
        document: None,
        metadata: None,
    })
    .await
    .unwrap()
}
