use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::validate::{Validate, check_date_range, require_text};

/// A Master Service Agreement signed with a vendor. Parent of SOWs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Msa {
    pub id: i64,
    pub title: String,
    pub vendor_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub document: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MsaInput {
    pub title: String,
    pub vendor_id: i64,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub document: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl Validate for MsaInput {
    fn validate(&self) -> Result<(), CoreError> {
        require_text("title", &self.title)?;
        check_date_range(Some(self.start_date), self.end_date)
    }
}
