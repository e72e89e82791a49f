use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    dto::{
        api::ErrorDto,
        mentor::{CreateMentorDto, MentorDto, PaginatedMentorsDto, UpdateMentorDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Claims, Permission},
    model::mentor::{CreateMentorParams, UpdateMentorParams},
    service::mentor::MentorService,
    state::AppState,
};

/// Tag for grouping mentor endpoints in OpenAPI documentation
pub static MENTOR_TAG: &str = "mentor";

/// Pagination plus the optional speciality filter for mentor listings.
#[derive(Deserialize)]
pub struct MentorListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub speciality_id: Option<i32>,
}

fn default_entries() -> u64 {
    10
}

/// Create a new mentor with their speciality assignments.
///
/// # Access Control
/// - `Admin` - Only admins can create mentors
#[utoipa::path(
    post,
    path = "/api/mentors",
    tag = MENTOR_TAG,
    request_body = CreateMentorDto,
    responses(
        (status = 201, description = "Successfully created mentor", body = MentorDto),
        (status = 400, description = "Invalid mentor data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 404, description = "Referenced speciality not found", body = ErrorDto),
        (status = 409, description = "Mentor email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mentor(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateMentorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let service = MentorService::new(&state.db);

    let params = CreateMentorParams::from_dto(payload);

    let mentor = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(mentor.into_dto())))
}

/// Get paginated mentors, optionally filtered by speciality.
///
/// # Access Control
/// - `Mentor` - Mentors and admins can list mentors
#[utoipa::path(
    get,
    path = "/api/mentors",
    tag = MENTOR_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("speciality_id" = Option<i32>, Query, description = "Restrict to mentors assigned to this speciality")
    ),
    responses(
        (status = 200, description = "Successfully retrieved mentors", body = PaginatedMentorsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the mentor or admin role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mentors(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<MentorListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Mentor])
        .await?;

    let service = MentorService::new(&state.db);

    let mentors = service
        .get_paginated(params.speciality_id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(mentors.into_dto())))
}

/// Get a specific mentor by ID.
///
/// # Access Control
/// - `Mentor` - Mentors and admins can view mentors
#[utoipa::path(
    get,
    path = "/api/mentors/{mentor_id}",
    tag = MENTOR_TAG,
    params(
        ("mentor_id" = i32, Path, description = "Mentor ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved mentor", body = MentorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the mentor or admin role", body = ErrorDto),
        (status = 404, description = "Mentor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mentor_by_id(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(mentor_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Mentor])
        .await?;

    let service = MentorService::new(&state.db);

    let mentor = service.get_by_id(mentor_id).await?;

    match mentor {
        Some(mentor) => Ok((StatusCode::OK, Json(mentor.into_dto()))),
        None => Err(AppError::NotFound("Mentor not found".to_string())),
    }
}

/// Update a mentor and replace their speciality assignments.
///
/// # Access Control
/// - `Admin` - Only admins can update mentors
#[utoipa::path(
    put,
    path = "/api/mentors/{mentor_id}",
    tag = MENTOR_TAG,
    params(
        ("mentor_id" = i32, Path, description = "Mentor ID")
    ),
    request_body = UpdateMentorDto,
    responses(
        (status = 200, description = "Successfully updated mentor", body = MentorDto),
        (status = 400, description = "Invalid mentor data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 404, description = "Mentor or referenced speciality not found", body = ErrorDto),
        (status = 409, description = "Mentor email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_mentor(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(mentor_id): Path<i32>,
    Json(payload): Json<UpdateMentorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let service = MentorService::new(&state.db);

    let params = UpdateMentorParams::from_dto(mentor_id, payload);

    let mentor = service.update(params).await?;

    match mentor {
        Some(mentor) => Ok((StatusCode::OK, Json(mentor.into_dto()))),
        None => Err(AppError::NotFound("Mentor not found".to_string())),
    }
}

/// Delete a mentor. Assigned interns become unassigned.
///
/// # Access Control
/// - `Admin` - Only admins can delete mentors
#[utoipa::path(
    delete,
    path = "/api/mentors/{mentor_id}",
    tag = MENTOR_TAG,
    params(
        ("mentor_id" = i32, Path, description = "Mentor ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted mentor"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 404, description = "Mentor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_mentor(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(mentor_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let service = MentorService::new(&state.db);

    let deleted = service.delete(mentor_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Mentor not found".to_string()))
    }
}
