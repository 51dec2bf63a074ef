//! Stored alert records and the normalized read/broadcast shape.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AlertId;

use super::Location;

/// An alert exactly as persisted.
///
/// Everything except `id` is optional: legacy rows may carry scalar
/// `latitude`/`longitude` instead of a `location` payload, or lack the
/// diagnosis and timestamp entirely. Reads repair these via
/// [`NormalizedAlert::from_stored`], never by failing.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredAlert {
    pub id: AlertId,
    pub location: Option<Location>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub diagnosis_note: Option<String>,
    pub recorded_at: Option<String>,
}

/// The single wire shape for alerts: HTTP responses and WebSocket pushes
/// serialize this exact type, so both surfaces are byte-identical.
///
/// Field names `Location` and `premature_diagnoses` are preserved for
/// compatibility with existing clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedAlert {
    pub id: String,
    #[serde(rename = "Location")]
    pub location: Location,
    #[serde(rename = "premature_diagnoses")]
    pub diagnosis_note: String,
    pub timestamp: String,
}

impl NormalizedAlert {
    /// Normalizes a stored record into the wire shape.
    ///
    /// Permanent compatibility shim for pre-migration rows. Precedence:
    /// an explicit `location` payload always wins; otherwise a legacy
    /// `latitude`/`longitude` pair (both required) is synthesized into
    /// `{lat, lng}`; otherwise the position defaults to
    /// `{lat: null, lng: null}`. Missing diagnosis and timestamp default
    /// to the empty string.
    pub fn from_stored(record: StoredAlert) -> Self {
        let location = match record.location {
            Some(location) => location,
            None => match (record.latitude, record.longitude) {
                (Some(lat), Some(lng)) => Location::lat_lng(Some(lat), Some(lng)),
                _ => Location::unknown(),
            },
        };

        Self {
            id: record.id.to_string(),
            location,
            diagnosis_note: record.diagnosis_note.unwrap_or_default(),
            timestamp: record.recorded_at.unwrap_or_default(),
        }
    }
}
