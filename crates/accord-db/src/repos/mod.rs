//! `Resource` implementations for every table.
//!
//! Each module maps one entity to its row layout and carries the tests for
//! that table's behaviour (constraints, search columns, cascades).

pub mod deliverable;
pub mod invoice;
pub mod milestone;
pub mod msa;
pub mod sow;
pub mod status;
pub mod vendor;
