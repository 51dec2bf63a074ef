//! Hospital registration and login glue.
//!
//! CRUD over the directory port; never on the alert fan-out path.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, HospitalId};
use crate::domain::hospital::HospitalAccount;
use crate::ports::HospitalDirectory;

/// Registers hospitals and authenticates them by opaque ID.
pub struct HospitalService {
    directory: Arc<dyn HospitalDirectory>,
}

impl HospitalService {
    /// Creates a new hospital service.
    pub fn new(directory: Arc<dyn HospitalDirectory>) -> Self {
        Self { directory }
    }

    /// Registers a new hospital and returns its directory account.
    pub async fn register(
        &self,
        hospital_name: String,
        email: String,
    ) -> Result<HospitalAccount, DomainError> {
        if hospital_name.trim().is_empty() {
            return Err(DomainError::validation(
                "hospital_name",
                "Hospital name cannot be empty",
            ));
        }
        if email.trim().is_empty() || !email.contains('@') {
            return Err(DomainError::validation("email", "Invalid email address"));
        }

        let account = self.directory.register(hospital_name, email).await?;
        tracing::info!(hospital_id = %account.hospital_id, "hospital registered");
        Ok(account)
    }

    /// Authenticates a hospital by its ID.
    ///
    /// An ill-formed or unknown ID is the same failure to the caller.
    pub async fn login(&self, hospital_id: &str) -> Result<HospitalAccount, DomainError> {
        let id: HospitalId = hospital_id
            .parse()
            .map_err(|_| DomainError::new(ErrorCode::InvalidHospitalId, "Invalid hospital ID"))?;

        self.directory
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::InvalidHospitalId, "Invalid hospital ID"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::sync::RwLock;

    struct InMemoryDirectory {
        accounts: RwLock<Vec<HospitalAccount>>,
    }

    impl InMemoryDirectory {
        fn new() -> Self {
            Self {
                accounts: RwLock::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HospitalDirectory for InMemoryDirectory {
        async fn register(
            &self,
            hospital_name: String,
            email: String,
        ) -> Result<HospitalAccount, DomainError> {
            let mut accounts = self.accounts.write().await;
            if accounts.iter().any(|a| a.email == email) {
                return Err(DomainError::new(
                    ErrorCode::EmailAlreadyRegistered,
                    "Email already registered",
                ));
            }
            let code = format!("H{:03}", accounts.len());
            let account =
                HospitalAccount::new(HospitalId::new(code).unwrap(), hospital_name, email);
            accounts.push(account.clone());
            Ok(account)
        }

        async fn find_by_id(
            &self,
            id: &HospitalId,
        ) -> Result<Option<HospitalAccount>, DomainError> {
            Ok(self
                .accounts
                .read()
                .await
                .iter()
                .find(|a| &a.hospital_id == id)
                .cloned())
        }
    }

    fn service() -> HospitalService {
        HospitalService::new(Arc::new(InMemoryDirectory::new()))
    }

    #[tokio::test]
    async fn register_then_login_round_trips() {
        let service = service();

        let account = service
            .register("General Hospital".to_string(), "ops@general.example".to_string())
            .await
            .unwrap();

        let logged_in = service.login(account.hospital_id.as_str()).await.unwrap();
        assert_eq!(logged_in, account);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let service = service();
        service
            .register("A".to_string(), "dup@example.com".to_string())
            .await
            .unwrap();

        let err = service
            .register("B".to_string(), "dup@example.com".to_string())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmailAlreadyRegistered);
    }

    #[tokio::test]
    async fn login_with_unknown_id_fails() {
        let err = service().login("ZZZZ").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidHospitalId);
    }

    #[tokio::test]
    async fn login_with_malformed_id_fails_the_same_way() {
        let err = service().login("not-a-code").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidHospitalId);
    }

    #[tokio::test]
    async fn register_validates_inputs() {
        let service = service();
        assert!(service
            .register("  ".to_string(), "a@b.c".to_string())
            .await
            .is_err());
        assert!(service
            .register("Hospital".to_string(), "not-an-email".to_string())
            .await
            .is_err());
    }
}
