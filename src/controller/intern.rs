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
        intern::{CreateInternDto, InternDto, PaginatedInternsDto, UpdateInternDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Claims, Permission},
    model::intern::{CreateInternParams, UpdateInternParams},
    service::intern::InternService,
    state::AppState,
};

/// Tag for grouping intern endpoints in OpenAPI documentation
pub static INTERN_TAG: &str = "intern";

/// Pagination plus the optional speciality filter for intern listings.
#[derive(Deserialize)]
pub struct InternListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub speciality_id: Option<i32>,
}

fn default_entries() -> u64 {
    10
}

/// Enroll an intern into a campaign.
///
/// # Access Control
/// - `Admin` - Only admins can enroll interns
#[utoipa::path(
    post,
    path = "/api/campaigns/{campaign_id}/interns",
    tag = INTERN_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID")
    ),
    request_body = CreateInternDto,
    responses(
        (status = 201, description = "Successfully enrolled intern", body = InternDto),
        (status = 400, description = "Invalid intern data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 404, description = "Campaign, speciality, or mentor not found", body = ErrorDto),
        (status = 409, description = "Email already enrolled or campaign completed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_intern(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(campaign_id): Path<i32>,
    Json(payload): Json<CreateInternDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let service = InternService::new(&state.db);

    let params = CreateInternParams::from_dto(campaign_id, payload);

    let intern = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(intern.into_dto())))
}

/// Get paginated interns for a campaign.
///
/// # Access Control
/// - `Mentor` - Mentors and admins can list interns
#[utoipa::path(
    get,
    path = "/api/campaigns/{campaign_id}/interns",
    tag = INTERN_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("speciality_id" = Option<i32>, Query, description = "Restrict to interns in this speciality")
    ),
    responses(
        (status = 200, description = "Successfully retrieved interns", body = PaginatedInternsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the mentor or admin role", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_interns(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(campaign_id): Path<i32>,
    Query(params): Query<InternListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Mentor])
        .await?;

    let service = InternService::new(&state.db);

    let interns = service
        .get_paginated(
            campaign_id,
            params.speciality_id,
            params.page,
            params.entries,
        )
        .await?;

    Ok((StatusCode::OK, Json(interns.into_dto())))
}

/// Get a specific intern.
///
/// Verifies the intern belongs to the campaign in the path.
///
/// # Access Control
/// - `Mentor` - Mentors and admins can view interns
#[utoipa::path(
    get,
    path = "/api/campaigns/{campaign_id}/interns/{intern_id}",
    tag = INTERN_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID"),
        ("intern_id" = i32, Path, description = "Intern ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved intern", body = InternDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the mentor or admin role", body = ErrorDto),
        (status = 404, description = "Intern not found in this campaign", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_intern_by_id(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((campaign_id, intern_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Mentor])
        .await?;

    let service = InternService::new(&state.db);

    let intern = service.get_by_id(campaign_id, intern_id).await?;

    match intern {
        Some(intern) => Ok((StatusCode::OK, Json(intern.into_dto()))),
        None => Err(AppError::NotFound("Intern not found".to_string())),
    }
}

/// Update an intern's fields.
///
/// The campaign assignment comes from the path and never changes.
///
/// # Access Control
/// - `Admin` - Only admins can update interns
#[utoipa::path(
    put,
    path = "/api/campaigns/{campaign_id}/interns/{intern_id}",
    tag = INTERN_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID"),
        ("intern_id" = i32, Path, description = "Intern ID")
    ),
    request_body = UpdateInternDto,
    responses(
        (status = 200, description = "Successfully updated intern", body = InternDto),
        (status = 400, description = "Invalid intern data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 404, description = "Intern, speciality, or mentor not found", body = ErrorDto),
        (status = 409, description = "Email already enrolled or campaign completed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_intern(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((campaign_id, intern_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateInternDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let service = InternService::new(&state.db);

    let params = UpdateInternParams::from_dto(intern_id, campaign_id, payload);

    let intern = service.update(params).await?;

    match intern {
        Some(intern) => Ok((StatusCode::OK, Json(intern.into_dto()))),
        None => Err(AppError::NotFound("Intern not found".to_string())),
    }
}

/// Remove an intern from a campaign.
///
/// # Access Control
/// - `Admin` - Only admins can remove interns
#[utoipa::path(
    delete,
    path = "/api/campaigns/{campaign_id}/interns/{intern_id}",
    tag = INTERN_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID"),
        ("intern_id" = i32, Path, description = "Intern ID")
    ),
    responses(
        (status = 204, description = "Successfully removed intern"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 404, description = "Intern not found in this campaign", body = ErrorDto),
        (status = 409, description = "Campaign completed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_intern(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((campaign_id, intern_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let service = InternService::new(&state.db);

    let deleted = service.delete(campaign_id, intern_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Intern not found".to_string()))
    }
}
