//! Open coordinate payload attached to an alert.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Semantically open mapping of coordinate keys to numeric-or-null values.
///
/// No fixed schema is enforced: clients may send `lat`/`lng`, extra keys,
/// or nothing at all, and missing fields must never fail a read. A map
/// rather than a fixed struct preserves that tolerance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(BTreeMap<String, Option<f64>>);

impl Location {
    /// Creates an empty location payload.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Creates the default unknown position, `{lat: null, lng: null}`.
    pub fn unknown() -> Self {
        Self::lat_lng(None, None)
    }

    /// Creates a `{lat, lng}` payload from two nullable coordinates.
    pub fn lat_lng(lat: Option<f64>, lng: Option<f64>) -> Self {
        let mut coords = BTreeMap::new();
        coords.insert("lat".to_string(), lat);
        coords.insert("lng".to_string(), lng);
        Self(coords)
    }

    /// Sets a coordinate value.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<f64>) {
        self.0.insert(key.into(), value);
    }

    /// Returns the value for a coordinate key, if present.
    pub fn get(&self, key: &str) -> Option<Option<f64>> {
        self.0.get(key).copied()
    }

    /// True when no coordinate keys are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of coordinate keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, Option<f64>)> for Location {
    fn from_iter<I: IntoIterator<Item = (String, Option<f64>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
