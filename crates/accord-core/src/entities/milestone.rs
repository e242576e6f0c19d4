use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::validate::{Validate, require_text};

/// A checkpoint within a SOW. Parent of deliverables.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Milestone {
    pub id: i64,
    pub sow_id: i64,
    pub name: String,
    pub status: String,
    pub due_date: Option<NaiveDate>,
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MilestoneInput {
    pub sow_id: i64,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl Validate for MilestoneInput {
    fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name)?;
        require_text("status", &self.status)
    }
}
