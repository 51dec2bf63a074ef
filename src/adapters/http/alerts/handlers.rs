//! HTTP handlers for alert endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::application::AlertService;

use super::dto::AddAlertRequest;

/// State shared by the alert handlers.
#[derive(Clone)]
pub struct AlertsState {
    pub service: Arc<AlertService>,
}

impl AlertsState {
    /// Creates a new alerts handler state.
    pub fn new(service: Arc<AlertService>) -> Self {
        Self { service }
    }
}

/// POST /api/add-alert - Persist a new alert and broadcast it to all live
/// subscribers. Returns the normalized record.
pub async fn add_alert(
    State(state): State<AlertsState>,
    Json(req): Json<AddAlertRequest>,
) -> Response {
    match state
        .service
        .publish(req.location, req.premature_diagnoses)
        .await
    {
        Ok(alert) => (StatusCode::OK, Json(alert)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/alerts - Every stored alert, normalized.
pub async fn list_alerts(State(state): State<AlertsState>) -> Response {
    match state.service.list().await {
        Ok(alerts) => (StatusCode::OK, Json(alerts)).into_response(),
        Err(e) => domain_error_response(e),
    }
}
