//! Hospital account record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::HospitalId;

/// A registered hospital in the directory.
///
/// The directory enforces uniqueness of both `hospital_id` and `email`.
/// Accounts never participate in the alert fan-out path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalAccount {
    pub hospital_id: HospitalId,
    pub hospital_name: String,
    pub email: String,
}

impl HospitalAccount {
    /// Creates a new account with the given identity.
    pub fn new(
        hospital_id: HospitalId,
        hospital_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            hospital_id,
            hospital_name: hospital_name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_carries_identity() {
        let id = HospitalId::new("QZ42").unwrap();
        let account = HospitalAccount::new(id.clone(), "General Hospital", "ops@general.example");
        assert_eq!(account.hospital_id, id);
        assert_eq!(account.hospital_name, "General Hospital");
    }
}
