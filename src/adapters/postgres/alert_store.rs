//! PostgreSQL implementation of AlertStore.
//!
//! Alerts live in a single append-only table. Legacy rows may carry scalar
//! `latitude`/`longitude` columns instead of the `location` document; the
//! scan surfaces them untouched and leaves repair to the normalization shim.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::domain::alert::{Location, StoredAlert};
use crate::domain::foundation::{AlertId, DomainError, ErrorCode, Timestamp};
use crate::ports::AlertStore;

/// PostgreSQL implementation of AlertStore.
#[derive(Clone)]
pub struct PostgresAlertStore {
    pool: PgPool,
}

impl PostgresAlertStore {
    /// Creates a new PostgresAlertStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlertStore for PostgresAlertStore {
    async fn insert(
        &self,
        location: Location,
        diagnosis_note: String,
    ) -> Result<StoredAlert, DomainError> {
        let id = AlertId::new();
        let recorded_at = Timestamp::now().to_iso8601();
        let location_doc = serde_json::to_value(&location).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to encode location: {}", e),
            )
        })?;

        sqlx::query(
            r#"
            INSERT INTO alerts (id, location, diagnosis, recorded_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id.as_uuid())
        .bind(&location_doc)
        .bind(&diagnosis_note)
        .bind(&recorded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert alert: {}", e),
            )
        })?;

        Ok(StoredAlert {
            id,
            location: Some(location),
            latitude: None,
            longitude: None,
            diagnosis_note: Some(diagnosis_note),
            recorded_at: Some(recorded_at),
        })
    }

    async fn list_all(&self) -> Result<Vec<StoredAlert>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, location, latitude, longitude, diagnosis, recorded_at
            FROM alerts
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list alerts: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_record).collect()
    }
}

fn row_to_record(row: PgRow) -> Result<StoredAlert, DomainError> {
    let id: Uuid = row.try_get("id").map_err(column_error)?;
    let location: Option<serde_json::Value> = row.try_get("location").map_err(column_error)?;
    let latitude: Option<f64> = row.try_get("latitude").map_err(column_error)?;
    let longitude: Option<f64> = row.try_get("longitude").map_err(column_error)?;
    let diagnosis_note: Option<String> = row.try_get("diagnosis").map_err(column_error)?;
    let recorded_at: Option<String> = row.try_get("recorded_at").map_err(column_error)?;

    // A location document that does not decode counts as absent; the read
    // must survive whatever an old writer left behind.
    let location = location.and_then(|doc| serde_json::from_value::<Location>(doc).ok());

    Ok(StoredAlert {
        id: AlertId::from_uuid(id),
        location,
        latitude,
        longitude,
        diagnosis_note,
        recorded_at,
    })
}

fn column_error(e: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to decode alert row: {}", e),
    )
}
