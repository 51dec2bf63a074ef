//! HTTP DTOs for alert endpoints.
//!
//! Responses serialize the domain `NormalizedAlert` directly so the HTTP
//! body and the WebSocket push stay byte-identical; only the request body
//! needs its own type here.

use serde::Deserialize;

use crate::domain::alert::Location;

/// Request body for `POST /api/add-alert`.
///
/// Wire field names preserved for compatibility with existing clients.
#[derive(Debug, Clone, Deserialize)]
pub struct AddAlertRequest {
    #[serde(rename = "Location")]
    pub location: Location,
    pub premature_diagnoses: String,
}
