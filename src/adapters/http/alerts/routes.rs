//! HTTP routes for alert endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{add_alert, list_alerts, AlertsState};

/// Creates the alert router with all endpoints.
pub fn alert_routes(state: AlertsState) -> Router {
    Router::new()
        .route("/add-alert", post(add_alert))
        .route("/alerts", get(list_alerts))
        .with_state(state)
}
