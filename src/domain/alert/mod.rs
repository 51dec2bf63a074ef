//! Alert domain - published events and their read-side normalization.
//!
//! An alert is a location payload plus a free-text preliminary diagnosis,
//! published by a hospital client and fanned out to live subscribers.

mod location;
mod record;

pub use location::Location;
pub use record::{NormalizedAlert, StoredAlert};
