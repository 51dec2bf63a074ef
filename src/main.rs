//! SekMed backend entry point.
//!
//! Wires configuration, storage, the connection registry, and the HTTP/WS
//! surfaces together, then serves until the process is stopped.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use sekmed_backend::adapters::http::{app_router, AlertsState, HospitalsState};
use sekmed_backend::adapters::postgres::{PostgresAlertStore, PostgresHospitalDirectory};
use sekmed_backend::adapters::websocket::{ConnectionRegistry, WsState};
use sekmed_backend::application::{AlertService, HospitalService};
use sekmed_backend::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.server.log_level.as_str())
        .init();

    info!(environment = ?config.server.environment, "Starting SekMed backend");

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;
    info!("Connected to database");

    if config.database.run_migrations {
        sqlx::migrate!().run(&pool).await?;
        info!("Migrations applied");
    }

    let registry = Arc::new(ConnectionRegistry::new());
    let alert_store = Arc::new(PostgresAlertStore::new(pool.clone()));
    let directory = Arc::new(PostgresHospitalDirectory::new(pool));

    let alert_service = Arc::new(AlertService::new(alert_store, registry.clone()));
    let hospital_service = Arc::new(HospitalService::new(directory));

    let app = app_router(
        AlertsState::new(alert_service),
        HospitalsState::new(hospital_service),
        WsState::new(registry),
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Listening");

    axum::serve(listener, app).await?;

    Ok(())
}
