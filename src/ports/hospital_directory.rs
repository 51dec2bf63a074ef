//! HospitalDirectory port - registration and ID-based lookup.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, HospitalId};
use crate::domain::hospital::HospitalAccount;

/// Port for the hospital account directory.
///
/// Registration is uniqueness-checked on email and assigns an opaque
/// 4-character hospital ID. The alert fan-out path never depends on this
/// port.
#[async_trait]
pub trait HospitalDirectory: Send + Sync {
    /// Registers a new hospital, assigning a unique hospital ID.
    ///
    /// Fails with `ErrorCode::EmailAlreadyRegistered` when the email is
    /// already in the directory.
    async fn register(
        &self,
        hospital_name: String,
        email: String,
    ) -> Result<HospitalAccount, DomainError>;

    /// Looks up an account by its hospital ID.
    async fn find_by_id(&self, id: &HospitalId)
        -> Result<Option<HospitalAccount>, DomainError>;
}
