//! HTTP routes for hospital endpoints.

use axum::{routing::post, Router};

use super::handlers::{login_hospital, register_hospital, HospitalsState};

/// Creates the hospital router with all endpoints.
pub fn hospital_routes(state: HospitalsState) -> Router {
    Router::new()
        .route("/register", post(register_hospital))
        .route("/login", post(login_hospital))
        .with_state(state)
}
