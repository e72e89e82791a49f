use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was present on the request.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature, expiry, or issuer validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// The token was valid but no person with its subject exists in the store.
    ///
    /// The caller authenticated against the identity provider but has not
    /// been provisioned yet (`GET /api/auth/me` provisions on first sight).
    #[error("No person provisioned for external id {0}")]
    PersonNotProvisioned(String),

    /// The person exists but does not hold any of the required roles.
    #[error("Person {0} denied: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Token problems map to 401 Unauthorized; a provisioned person lacking the
/// required role maps to 403 Forbidden. Full diagnostics are logged at debug
/// level while client-facing messages stay generic to avoid information
/// leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::PersonNotProvisioned(_) => {
                tracing::debug!("Authentication failed: {}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(person_id, reason) => {
                tracing::debug!("Access denied for person {}: {}", person_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Insufficient permissions".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
