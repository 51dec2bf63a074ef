//! AlertStore port - durable append-only log of alert records.

use async_trait::async_trait;

use crate::domain::alert::{Location, StoredAlert};
use crate::domain::foundation::DomainError;

/// Port for persisting and scanning alert records.
///
/// The store assigns the id and capture timestamp on insert. It only fails
/// on underlying storage unavailability; whether that is fatal or retriable
/// is the caller's call.
#[async_trait]
pub trait AlertStore: Send + Sync {
    /// Persists a new record with a store-assigned id and current timestamp.
    async fn insert(
        &self,
        location: Location,
        diagnosis_note: String,
    ) -> Result<StoredAlert, DomainError>;

    /// Returns every stored record in persisted order.
    ///
    /// Legacy and malformed rows come back with the affected fields unset;
    /// they must never fail the scan.
    async fn list_all(&self) -> Result<Vec<StoredAlert>, DomainError>;
}
