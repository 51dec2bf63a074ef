//! Alert publishing and history reads.

use std::sync::Arc;

use crate::adapters::websocket::ConnectionRegistry;
use crate::domain::alert::{Location, NormalizedAlert};
use crate::domain::foundation::DomainError;
use crate::ports::AlertStore;

/// Validates and persists incoming alerts, drives the registry fan-out, and
/// serves historical reads.
pub struct AlertService {
    store: Arc<dyn AlertStore>,
    registry: Arc<ConnectionRegistry>,
}

impl AlertService {
    /// Creates a new alert service.
    pub fn new(store: Arc<dyn AlertStore>, registry: Arc<ConnectionRegistry>) -> Self {
        Self { store, registry }
    }

    /// Persists a new alert, then broadcasts the normalized record to every
    /// live subscriber, then returns it.
    ///
    /// Broadcasting happens strictly after successful persistence. The two
    /// phases are not transactional: per-subscriber delivery failures are
    /// absorbed by the registry and persistence is never rolled back.
    pub async fn publish(
        &self,
        location: Location,
        diagnosis_note: String,
    ) -> Result<NormalizedAlert, DomainError> {
        let stored = self.store.insert(location, diagnosis_note).await?;
        let alert = NormalizedAlert::from_stored(stored);

        self.registry.broadcast(&alert).await;
        tracing::info!(alert_id = %alert.id, "alert published");

        Ok(alert)
    }

    /// Returns every stored alert, each normalized via the compatibility
    /// shim (explicit location > legacy lat/lng pair > null coordinates).
    pub async fn list(&self) -> Result<Vec<NormalizedAlert>, DomainError> {
        let records = self.store.list_all().await?;
        Ok(records
            .into_iter()
            .map(NormalizedAlert::from_stored)
            .collect())
    }
}
