//! PostgreSQL implementation of HospitalDirectory.

use async_trait::async_trait;
use rand::Rng;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, HospitalId, ValidationError};
use crate::domain::hospital::HospitalAccount;
use crate::ports::HospitalDirectory;

const ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const MAX_ID_ATTEMPTS: usize = 16;

/// PostgreSQL implementation of HospitalDirectory.
#[derive(Clone)]
pub struct PostgresHospitalDirectory {
    pool: PgPool,
}

impl PostgresHospitalDirectory {
    /// Creates a new PostgresHospitalDirectory.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HospitalDirectory for PostgresHospitalDirectory {
    async fn register(
        &self,
        hospital_name: String,
        email: String,
    ) -> Result<HospitalAccount, DomainError> {
        let existing = sqlx::query("SELECT hospital_id FROM hospitals WHERE email = $1")
            .bind(&email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to check email: {}", e),
                )
            })?;

        if existing.is_some() {
            return Err(DomainError::new(
                ErrorCode::EmailAlreadyRegistered,
                "Email already registered",
            ));
        }

        // The ID space is tiny (36^4); retry against the primary key until
        // an unused code lands. Concurrent registrations with the same email
        // fall through to the unique index.
        for _ in 0..MAX_ID_ATTEMPTS {
            let hospital_id = generate_hospital_id().map_err(|e| {
                DomainError::new(ErrorCode::InternalError, e.to_string())
            })?;

            let result = sqlx::query(
                r#"
                INSERT INTO hospitals (hospital_id, hospital_name, email)
                VALUES ($1, $2, $3)
                ON CONFLICT (hospital_id) DO NOTHING
                "#,
            )
            .bind(hospital_id.as_str())
            .bind(&hospital_name)
            .bind(&email)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.constraint() == Some("hospitals_email_key") => {
                    DomainError::new(
                        ErrorCode::EmailAlreadyRegistered,
                        "Email already registered",
                    )
                }
                _ => DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to insert hospital: {}", e),
                ),
            })?;

            if result.rows_affected() == 1 {
                return Ok(HospitalAccount::new(hospital_id, hospital_name, email));
            }
        }

        Err(DomainError::new(
            ErrorCode::InternalError,
            "Could not allocate a unique hospital ID",
        ))
    }

    async fn find_by_id(
        &self,
        id: &HospitalId,
    ) -> Result<Option<HospitalAccount>, DomainError> {
        let row = sqlx::query(
            "SELECT hospital_id, hospital_name, email FROM hospitals WHERE hospital_id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to look up hospital: {}", e),
            )
        })?;

        match row {
            None => Ok(None),
            Some(row) => {
                let code: String = row.try_get("hospital_id").map_err(column_error)?;
                let hospital_name: String = row.try_get("hospital_name").map_err(column_error)?;
                let email: String = row.try_get("email").map_err(column_error)?;
                let hospital_id = HospitalId::new(code).map_err(|e| {
                    DomainError::new(
                        ErrorCode::InternalError,
                        format!("Stored hospital ID is malformed: {}", e),
                    )
                })?;
                Ok(Some(HospitalAccount::new(hospital_id, hospital_name, email)))
            }
        }
    }
}

/// Generates a random 4-character uppercase alphanumeric hospital ID.
fn generate_hospital_id() -> Result<HospitalId, ValidationError> {
    let mut rng = rand::thread_rng();
    let code: String = (0..4)
        .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
        .collect();
    HospitalId::new(code)
}

fn column_error(e: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to decode hospital row: {}", e),
    )
}
