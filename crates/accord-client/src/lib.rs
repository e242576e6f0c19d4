//! # accord-client
//!
//! HTTP client for the Accord REST API and the state model behind the MSA
//! list page: paging, search, sort, and the delete-confirm-reload cycle.

pub mod client;
pub mod error;
pub mod view;

pub use client::ApiClient;
pub use error::ClientError;
pub use view::{MsaApi, MsaListView};
