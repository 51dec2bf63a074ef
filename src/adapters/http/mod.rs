//! HTTP adapters - REST API implementations and the app router.

pub mod alerts;
pub mod error;
pub mod hospitals;

use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::websocket::{websocket_routes, WsState};

pub use alerts::{alert_routes, AlertsState};
pub use error::{domain_error_response, ErrorResponse};
pub use hospitals::{hospital_routes, HospitalsState};

/// Assembles the full application router.
///
/// REST endpoints live under `/api`, the subscription endpoint at
/// `/ws/alerts`. CORS allows any origin/method/header so browser clients
/// can talk to the API directly. The request timeout covers the REST
/// surface only; subscriber connections are long-lived by design.
pub fn app_router(
    alerts: AlertsState,
    hospitals: HospitalsState,
    ws: WsState,
    request_timeout: Duration,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = alert_routes(alerts)
        .merge(hospital_routes(hospitals))
        .layer(TimeoutLayer::new(request_timeout));

    Router::new()
        .nest("/api", api)
        .merge(websocket_routes(ws))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::websocket::ConnectionRegistry;
    use crate::application::{AlertService, HospitalService};
    use crate::domain::alert::{Location, StoredAlert};
    use crate::domain::foundation::{AlertId, DomainError, HospitalId, Timestamp};
    use crate::domain::hospital::HospitalAccount;
    use crate::ports::{AlertStore, HospitalDirectory};
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    struct NullAlertStore {
        records: RwLock<Vec<StoredAlert>>,
    }

    #[async_trait]
    impl AlertStore for NullAlertStore {
        async fn insert(
            &self,
            location: Location,
            diagnosis_note: String,
        ) -> Result<StoredAlert, DomainError> {
            let record = StoredAlert {
                id: AlertId::new(),
                location: Some(location),
                latitude: None,
                longitude: None,
                diagnosis_note: Some(diagnosis_note),
                recorded_at: Some(Timestamp::now().to_iso8601()),
            };
            self.records.write().await.push(record.clone());
            Ok(record)
        }

        async fn list_all(&self) -> Result<Vec<StoredAlert>, DomainError> {
            Ok(self.records.read().await.clone())
        }
    }

    struct NullDirectory;

    #[async_trait]
    impl HospitalDirectory for NullDirectory {
        async fn register(
            &self,
            hospital_name: String,
            email: String,
        ) -> Result<HospitalAccount, DomainError> {
            Ok(HospitalAccount::new(
                HospitalId::new("TEST").unwrap(),
                hospital_name,
                email,
            ))
        }

        async fn find_by_id(
            &self,
            _id: &HospitalId,
        ) -> Result<Option<HospitalAccount>, DomainError> {
            Ok(None)
        }
    }

    #[test]
    fn app_router_assembles() {
        let registry = Arc::new(ConnectionRegistry::new());
        let store = Arc::new(NullAlertStore {
            records: RwLock::new(Vec::new()),
        });
        let alerts = AlertsState::new(Arc::new(AlertService::new(store, registry.clone())));
        let hospitals =
            HospitalsState::new(Arc::new(HospitalService::new(Arc::new(NullDirectory))));

        let _router = app_router(
            alerts,
            hospitals,
            WsState::new(registry),
            Duration::from_secs(30),
        );
    }
}
