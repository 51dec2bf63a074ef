//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `alert` - Alert records, the open location payload, and read-side normalization
//! - `hospital` - Hospital account vocabulary

pub mod alert;
pub mod foundation;
pub mod hospital;
