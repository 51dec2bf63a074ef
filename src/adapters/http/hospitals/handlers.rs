//! HTTP handlers for hospital registration and login.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::application::HospitalService;

use super::dto::{HospitalResponse, LoginRequest, RegisterRequest};

/// State shared by the hospital handlers.
#[derive(Clone)]
pub struct HospitalsState {
    pub service: Arc<HospitalService>,
}

impl HospitalsState {
    /// Creates a new hospitals handler state.
    pub fn new(service: Arc<HospitalService>) -> Self {
        Self { service }
    }
}

/// POST /api/register - Register a new hospital and return its assigned ID.
pub async fn register_hospital(
    State(state): State<HospitalsState>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    match state.service.register(req.hospital_name, req.email).await {
        Ok(account) => (StatusCode::OK, Json(HospitalResponse::from(account))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/login - Authenticate a hospital by its opaque ID.
pub async fn login_hospital(
    State(state): State<HospitalsState>,
    Json(req): Json<LoginRequest>,
) -> Response {
    match state.service.login(&req.hospital_id).await {
        Ok(account) => (StatusCode::OK, Json(HospitalResponse::from(account))).into_response(),
        Err(e) => domain_error_response(e),
    }
}
