//! Entity structs for every table in the contract-records schema.
//!
//! Each table has two shapes: the stored entity (with its generated `id`) and
//! an input used for both create and full-replacement update. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod deliverable;
mod invoice;
mod milestone;
mod msa;
mod sow;
mod status;
mod vendor;

pub use deliverable::{Deliverable, DeliverableInput};
pub use invoice::{Invoice, InvoiceInput};
pub use milestone::{Milestone, MilestoneInput};
pub use msa::{Msa, MsaInput};
pub use sow::{Sow, SowInput};
pub use status::{Status, StatusInput};
pub use vendor::{Vendor, VendorInput};
