//! Wire-format error types
//!
//! Every failing response carries `success: false` and a human-readable
//! `message`. Validation failures additionally carry the full ordered
//! `errors` list, and internal errors attach the underlying diagnostic
//! under `error`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::account::Role;
use crate::domain::DomainError;

/// Error response body
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(rename = "userRole", skip_serializing_if = "Option::is_none")]
    pub user_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// API error with status code
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                success: false,
                message: message.into(),
                errors: None,
                user_role: None,
                error: None,
            },
        }
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Authentication error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Service unavailable (retryable)
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    /// Validation failure carrying the full ordered rule-violation list
    pub fn validation(errors: Vec<String>) -> Self {
        let mut err = Self::bad_request("Validation failed");
        err.body.errors = Some(errors);
        err
    }

    /// Replace the catch-all message on an internal error. Responses
    /// for client faults keep their specific message.
    pub fn with_internal_message(mut self, message: impl Into<String>) -> Self {
        if self.status == StatusCode::INTERNAL_SERVER_ERROR {
            self.body.message = message.into();
        }
        self
    }

    /// Attach the requester's role to a missing-profile response
    pub fn with_user_role(mut self, role: Role) -> Self {
        if self.status == StatusCode::NOT_FOUND {
            self.body.user_role = Some(role.to_string());
        }
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { errors } => Self::validation(errors),
            DomainError::Conflict { message } => Self::bad_request(message),
            DomainError::InvalidCredentials => Self::unauthorized("Invalid email or password"),
            DomainError::Unauthorized { message } => Self::unauthorized(message),
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Unavailable { message } => {
                let mut api = Self::unavailable("Service temporarily unavailable");
                api.body.error = Some(message);
                api
            }
            DomainError::Storage { message } | DomainError::Internal { message } => {
                let mut api = Self::internal("Internal server error");
                api.body.error = Some(message);
                api
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.body.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_conversion_keeps_error_order() {
        let domain_err = DomainError::validation(vec![
            "Name is required".to_string(),
            "Location is required".to_string(),
        ]);
        let api_err: ApiError = domain_err.into();

        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_err.body.message, "Validation failed");
        assert_eq!(
            api_err.body.errors,
            Some(vec![
                "Name is required".to_string(),
                "Location is required".to_string(),
            ])
        );
    }

    #[test]
    fn test_conflict_maps_to_bad_request() {
        let api_err: ApiError = DomainError::conflict("User already exists").into();

        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_err.body.message, "User already exists");
        assert!(api_err.body.errors.is_none());
    }

    #[test]
    fn test_invalid_credentials_maps_to_unauthorized() {
        let api_err: ApiError = DomainError::InvalidCredentials.into();

        assert_eq!(api_err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(api_err.body.message, "Invalid email or password");
    }

    #[test]
    fn test_storage_failure_keeps_diagnostic() {
        let api_err: ApiError = DomainError::storage("connection reset").into();

        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_err.body.message, "Internal server error");
        assert_eq!(api_err.body.error, Some("connection reset".to_string()));
    }

    #[test]
    fn test_timeout_maps_to_service_unavailable() {
        let api_err: ApiError = DomainError::unavailable("Profile store call timed out").into();

        assert_eq!(api_err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            api_err.body.error,
            Some("Profile store call timed out".to_string())
        );
    }

    #[test]
    fn test_internal_message_override_spares_client_faults() {
        let internal: ApiError = DomainError::storage("boom").into();
        let overridden = internal.with_internal_message("Registration Failed");
        assert_eq!(overridden.body.message, "Registration Failed");

        let conflict: ApiError = DomainError::conflict("User already exists").into();
        let untouched = conflict.with_internal_message("Registration Failed");
        assert_eq!(untouched.body.message, "User already exists");
    }

    #[test]
    fn test_user_role_attaches_only_to_not_found() {
        let not_found: ApiError = DomainError::not_found("No musician profile found").into();
        let tagged = not_found.with_user_role(Role::Musician);
        assert_eq!(tagged.body.user_role, Some("musician".to_string()));

        let internal: ApiError = DomainError::internal("boom").into();
        let untagged = internal.with_user_role(Role::Musician);
        assert!(untagged.body.user_role.is_none());
    }

    #[test]
    fn test_body_serialization_skips_absent_fields() {
        let api_err = ApiError::bad_request("User already exists");
        let json = serde_json::to_string(&api_err.body).unwrap();

        assert_eq!(json, r#"{"success":false,"message":"User already exists"}"#);
    }

    #[test]
    fn test_user_role_serializes_camel_cased() {
        let api_err: ApiError = DomainError::not_found("No venue profile found").into();
        let json =
            serde_json::to_string(&api_err.with_user_role(Role::Venue).body).unwrap();

        assert!(json.contains(r#""userRole":"venue""#));
    }
}
