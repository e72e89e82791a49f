//! Application error types and their HTTP mappings.
//!
//! `AppError` is the single error type flowing out of controllers. Lower
//! layers convert into it with `#[from]`, and its `IntoResponse` impl picks
//! the status code and JSON body, so handlers only ever return
//! `Result<_, AppError>`.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    dto::api::ErrorDto,
    error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error.
///
/// Infrastructure failures (database, upstream HTTP) wrap their source error
/// transparently. Business-rule violations carry a client-facing message in
/// a plain `String` variant; the variant picks the status code.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed configuration at startup. Maps to 500.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization failure. Status mapping lives in
    /// `AuthError::into_response` (401 for token problems, 403 for missing
    /// roles).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// SeaORM database failure. Maps to 500; details are logged, not sent.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// A call to the external directory service failed. Maps to 502 since
    /// the fault is upstream, not in this service.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Request payload failed validation. Maps to 400 with the offending
    /// fields listed.
    #[error(transparent)]
    ValidationErr(#[from] validator::ValidationErrors),

    /// The addressed resource does not exist (or is scoped under a different
    /// parent). Maps to 404.
    #[error("{0}")]
    NotFound(String),

    /// The request is structurally valid but semantically wrong, e.g. a
    /// campaign whose end date is not after its start. Maps to 400.
    #[error("{0}")]
    BadRequest(String),

    /// A uniqueness or state precondition failed: duplicate names or emails,
    /// mutating a completed campaign's roster, deleting a speciality still
    /// in use, revoking the last admin. Maps to 409.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected internal state. The message is logged server-side and the
    /// client gets a generic 500 body.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_body(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_body(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_body(StatusCode::CONFLICT, msg),
            Self::ValidationErr(errors) => error_body(StatusCode::BAD_REQUEST, errors.to_string()),
            Self::ReqwestErr(err) => {
                tracing::error!("Directory service request failed: {}", err);
                error_body(
                    StatusCode::BAD_GATEWAY,
                    "Upstream directory service unavailable".to_string(),
                )
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_body(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

/// Fallback wrapper turning any displayable error into a generic 500.
///
/// The full error is logged; the response body never echoes it, so internal
/// details (connection strings, SQL) cannot leak to clients.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
