//! HTTP adapter for alert endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::AddAlertRequest;
pub use handlers::AlertsState;
pub use routes::alert_routes;
