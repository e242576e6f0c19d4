use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::validate::{Validate, check_amount, require_text};

/// A concrete output owed under a milestone.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Deliverable {
    pub id: i64,
    pub milestone_id: i64,
    pub description: String,
    pub amount: Option<f64>,
    pub status: String,
    pub due_date: Option<NaiveDate>,
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DeliverableInput {
    pub milestone_id: i64,
    pub description: String,
    #[serde(default)]
    pub amount: Option<f64>,
    pub status: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl Validate for DeliverableInput {
    fn validate(&self) -> Result<(), CoreError> {
        require_text("description", &self.description)?;
        require_text("status", &self.status)?;
        check_amount("amount", self.amount)
    }
}
