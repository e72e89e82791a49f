use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use validator::Validate;

use crate::{
    dto::{
        api::ErrorDto,
        person::{AdminInvitationDto, InviteAdminDto, PersonDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Claims, Permission},
    service::person::PersonService,
    state::AppState,
};

/// Tag for grouping administrator endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// List every person holding the admin role.
///
/// # Access Control
/// - `Admin` - Only admins can list administrators
#[utoipa::path(
    get,
    path = "/api/admins",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Successfully retrieved administrators", body = Vec<PersonDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admins(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let service = PersonService::new(&state.db, &state.directory);

    let admins = service.get_admins().await?;

    Ok((
        StatusCode::OK,
        Json(admins.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Invite a new administrator by email.
///
/// Creates the account through the external directory service and records
/// the person locally with the admin role, so they are authorized the moment
/// they first sign in.
///
/// # Access Control
/// - `Admin` - Only admins can invite administrators
#[utoipa::path(
    post,
    path = "/api/admins/invitations",
    tag = ADMIN_TAG,
    request_body = InviteAdminDto,
    responses(
        (status = 201, description = "Successfully invited administrator", body = AdminInvitationDto),
        (status = 400, description = "Invalid invitation data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 409, description = "Person is already an administrator", body = ErrorDto),
        (status = 502, description = "Directory service unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn invite_admin(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<InviteAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let service = PersonService::new(&state.db, &state.directory);

    let invitation = service
        .invite_admin(payload.email, payload.display_name)
        .await?;

    Ok((StatusCode::CREATED, Json(invitation.into_dto())))
}

/// Revoke the admin role from a person.
///
/// The last remaining administrator cannot be revoked.
///
/// # Access Control
/// - `Admin` - Only admins can revoke administrators
#[utoipa::path(
    delete,
    path = "/api/admins/{person_id}",
    tag = ADMIN_TAG,
    params(
        ("person_id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 204, description = "Successfully revoked administrator"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 404, description = "Person not found or not an administrator", body = ErrorDto),
        (status = 409, description = "Cannot revoke the last administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn revoke_admin(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let service = PersonService::new(&state.db, &state.directory);

    let revoked = service.revoke_admin(person_id).await?;

    if revoked {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(
            "Person not found or not an administrator".to_string(),
        ))
    }
}
