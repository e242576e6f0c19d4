use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::validate::{Validate, check_amount, require_text};

/// A vendor invoice, optionally billed against a SOW.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Invoice {
    pub id: i64,
    pub invoice_number: String,
    pub vendor_id: i64,
    pub sow_id: Option<i64>,
    pub amount: f64,
    pub invoice_date: NaiveDate,
    pub payment_status: String,
    pub document: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InvoiceInput {
    pub invoice_number: String,
    pub vendor_id: i64,
    #[serde(default)]
    pub sow_id: Option<i64>,
    pub amount: f64,
    pub invoice_date: NaiveDate,
    pub payment_status: String,
    #[serde(default)]
    pub document: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl Validate for InvoiceInput {
    fn validate(&self) -> Result<(), CoreError> {
        require_text("invoice_number", &self.invoice_number)?;
        require_text("payment_status", &self.payment_status)?;
        check_amount("amount", Some(self.amount))
    }
}
