//! Camp domain model.
//!
//! # Responsibility
//! - Define plain data records for campers, activities and signups.
//! - Keep field validation as pure functions, independent of storage.
//!
//! # Invariants
//! - Every record is identified by a storage-assigned integer id.
//! - Values are validated before they reach the persistence layer.

pub mod activity;
pub mod camper;
pub mod signup;
pub mod validation;
