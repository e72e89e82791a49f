use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use validator::Validate;

use crate::{
    dto::{
        api::{ErrorDto, PaginationParams},
        speciality::{
            CreateSpecialityDto, PaginatedSpecialitiesDto, SpecialityDto, UpdateSpecialityDto,
        },
    },
    error::AppError,
    middleware::auth::{AuthGuard, Claims, Permission},
    service::speciality::SpecialityService,
    state::AppState,
};

/// Tag for grouping speciality endpoints in OpenAPI documentation
pub static SPECIALITY_TAG: &str = "speciality";

/// Create a new speciality.
///
/// # Access Control
/// - `Admin` - Only admins can create specialities
#[utoipa::path(
    post,
    path = "/api/specialities",
    tag = SPECIALITY_TAG,
    request_body = CreateSpecialityDto,
    responses(
        (status = 201, description = "Successfully created speciality", body = SpecialityDto),
        (status = 400, description = "Invalid speciality data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 409, description = "Speciality name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_speciality(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateSpecialityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let service = SpecialityService::new(&state.db);

    let speciality = service.create(payload.name).await?;

    Ok((StatusCode::CREATED, Json(speciality.into_dto())))
}

/// Get paginated specialities ordered by name.
///
/// # Access Control
/// - `Mentor` - Mentors and admins can list specialities
#[utoipa::path(
    get,
    path = "/api/specialities",
    tag = SPECIALITY_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved specialities", body = PaginatedSpecialitiesDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the mentor or admin role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_specialities(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Mentor])
        .await?;

    let service = SpecialityService::new(&state.db);

    let specialities = service.get_paginated(params.page, params.entries).await?;

    Ok((StatusCode::OK, Json(specialities.into_dto())))
}

/// Get a specific speciality by ID.
///
/// # Access Control
/// - `Mentor` - Mentors and admins can view specialities
#[utoipa::path(
    get,
    path = "/api/specialities/{speciality_id}",
    tag = SPECIALITY_TAG,
    params(
        ("speciality_id" = i32, Path, description = "Speciality ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved speciality", body = SpecialityDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the mentor or admin role", body = ErrorDto),
        (status = 404, description = "Speciality not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_speciality_by_id(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(speciality_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Mentor])
        .await?;

    let service = SpecialityService::new(&state.db);

    let speciality = service.get_by_id(speciality_id).await?;

    match speciality {
        Some(speciality) => Ok((StatusCode::OK, Json(speciality.into_dto()))),
        None => Err(AppError::NotFound("Speciality not found".to_string())),
    }
}

/// Rename a speciality.
///
/// # Access Control
/// - `Admin` - Only admins can update specialities
#[utoipa::path(
    put,
    path = "/api/specialities/{speciality_id}",
    tag = SPECIALITY_TAG,
    params(
        ("speciality_id" = i32, Path, description = "Speciality ID")
    ),
    request_body = UpdateSpecialityDto,
    responses(
        (status = 200, description = "Successfully updated speciality", body = SpecialityDto),
        (status = 400, description = "Invalid speciality data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 404, description = "Speciality not found", body = ErrorDto),
        (status = 409, description = "Speciality name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_speciality(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(speciality_id): Path<i32>,
    Json(payload): Json<UpdateSpecialityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let service = SpecialityService::new(&state.db);

    let speciality = service.update(speciality_id, payload.name).await?;

    match speciality {
        Some(speciality) => Ok((StatusCode::OK, Json(speciality.into_dto()))),
        None => Err(AppError::NotFound("Speciality not found".to_string())),
    }
}

/// Delete a speciality and its learning topics.
///
/// Refused while interns are still assigned to the speciality.
///
/// # Access Control
/// - `Admin` - Only admins can delete specialities
#[utoipa::path(
    delete,
    path = "/api/specialities/{speciality_id}",
    tag = SPECIALITY_TAG,
    params(
        ("speciality_id" = i32, Path, description = "Speciality ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted speciality"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 404, description = "Speciality not found", body = ErrorDto),
        (status = 409, description = "Speciality still assigned to interns", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_speciality(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(speciality_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let service = SpecialityService::new(&state.db);

    let deleted = service.delete(speciality_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Speciality not found".to_string()))
    }
}
