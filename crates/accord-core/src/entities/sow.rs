use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::validate::{Validate, check_amount, check_date_range, require_text};

/// A Statement of Work under an MSA. Parent of milestones.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Sow {
    pub id: i64,
    pub msa_id: i64,
    pub title: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget: Option<f64>,
    pub document: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SowInput {
    pub msa_id: i64,
    pub title: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub document: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl Validate for SowInput {
    fn validate(&self) -> Result<(), CoreError> {
        require_text("title", &self.title)?;
        check_date_range(self.start_date, self.end_date)?;
        check_amount("budget", self.budget)
    }
}
