//! # accord-core
//!
//! Core types shared across all Accord crates.
//!
//! This crate provides:
//! - Entity structs and their input (create/replace) shapes for every table
//! - `EntityKind`, the resource catalogue (table, route segment, label)
//! - List query model: pagination, `column:direction` sorting, search
//! - Response envelopes returned by the REST API
//! - Input validation and cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod query;
pub mod responses;
pub mod validate;
