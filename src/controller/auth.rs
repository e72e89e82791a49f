use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};

use crate::{
    dto::{api::ErrorDto, person::PersonDto},
    error::AppError,
    middleware::auth::Claims,
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Get the authenticated caller, provisioning them on first sight.
///
/// Upserts the person from the token claims and refreshes their roles from
/// the directory service's group membership. This is the only endpoint a
/// freshly invited person can call before holding any role.
///
/// # Returns
/// - `200 OK` - The caller with their current roles
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `502 Bad Gateway` - Directory service unavailable
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Successfully retrieved caller", body = PersonDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 502, description = "Directory service unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(
        &state.db,
        &state.directory,
        &state.directory_admin_group,
        &state.directory_mentor_group,
    );

    let person = service.sync_person(&claims).await?;

    Ok((StatusCode::OK, Json(person.into_dto())))
}
