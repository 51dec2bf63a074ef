//! Shared HTTP error payload and DomainError → response mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Error body for all failing endpoints.
///
/// The `detail` field name matches what existing clients already parse.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    /// Creates an error response with the given detail message.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Maps a domain error to an HTTP response.
pub fn domain_error_response(err: DomainError) -> Response {
    let status = match err.code {
        ErrorCode::ValidationFailed
        | ErrorCode::InvalidFormat
        | ErrorCode::EmailAlreadyRegistered => StatusCode::BAD_REQUEST,
        ErrorCode::InvalidHospitalId => StatusCode::UNAUTHORIZED,
        ErrorCode::DatabaseError | ErrorCode::InternalError => {
            tracing::error!(code = %err.code, "request failed: {}", err.message);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(ErrorResponse::new(err.message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_maps_to_bad_request() {
        let err = DomainError::new(ErrorCode::EmailAlreadyRegistered, "Email already registered");
        let response = domain_error_response(err);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_hospital_id_maps_to_unauthorized() {
        let err = DomainError::new(ErrorCode::InvalidHospitalId, "Invalid hospital ID");
        let response = domain_error_response(err);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn database_error_maps_to_internal_server_error() {
        let err = DomainError::new(ErrorCode::DatabaseError, "connection refused");
        let response = domain_error_response(err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
