//! Response envelopes returned as JSON by the REST API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One page of a list call.
///
/// `total` counts every row matching the filter, not just the rows on this page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub skip: u32,
    pub limit: u32,
}

impl<T> ListResponse<T> {
    /// Whether another page exists after this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.skip) + (self.data.len() as u64) < self.total
    }
}

/// Plain message body, e.g. the API welcome route.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body: `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}
