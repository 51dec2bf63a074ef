//! HTTP DTOs for hospital endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::hospital::HospitalAccount;

/// Request body for `POST /api/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub hospital_name: String,
    pub email: String,
}

/// Request body for `POST /api/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub hospital_id: String,
}

/// Response for both register and login. The email is deliberately omitted.
#[derive(Debug, Clone, Serialize)]
pub struct HospitalResponse {
    pub hospital_id: String,
    pub hospital_name: String,
}

impl From<HospitalAccount> for HospitalResponse {
    fn from(account: HospitalAccount) -> Self {
        Self {
            hospital_id: account.hospital_id.to_string(),
            hospital_name: account.hospital_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::HospitalId;

    #[test]
    fn response_omits_email() {
        let account = HospitalAccount::new(
            HospitalId::new("AB12").unwrap(),
            "General Hospital",
            "ops@general.example",
        );
        let json = serde_json::to_value(HospitalResponse::from(account)).unwrap();
        assert_eq!(json["hospital_id"], "AB12");
        assert_eq!(json["hospital_name"], "General Hospital");
        assert!(json.get("email").is_none());
    }
}
