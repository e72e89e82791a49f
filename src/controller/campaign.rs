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
        campaign::{CampaignDto, CreateCampaignDto, PaginatedCampaignsDto, UpdateCampaignDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Claims, Permission},
    model::campaign::{CreateCampaignParams, UpdateCampaignParams},
    service::campaign::CampaignService,
    state::AppState,
};

/// Tag for grouping campaign endpoints in OpenAPI documentation
pub static CAMPAIGN_TAG: &str = "campaign";

/// Create a new internship campaign.
///
/// # Access Control
/// - `Admin` - Only admins can create campaigns
///
/// # Returns
/// - `201 Created` - Successfully created campaign
/// - `400 Bad Request` - Invalid campaign data or date order
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks the admin role
/// - `409 Conflict` - A campaign with the same name exists
#[utoipa::path(
    post,
    path = "/api/campaigns",
    tag = CAMPAIGN_TAG,
    request_body = CreateCampaignDto,
    responses(
        (status = 201, description = "Successfully created campaign", body = CampaignDto),
        (status = 400, description = "Invalid campaign data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 409, description = "Campaign name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_campaign(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateCampaignDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let service = CampaignService::new(&state.db);

    let params = CreateCampaignParams::from_dto(payload);

    let campaign = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(campaign.into_dto())))
}

/// Get paginated campaigns, newest first.
///
/// # Access Control
/// - `Mentor` - Mentors and admins can list campaigns
#[utoipa::path(
    get,
    path = "/api/campaigns",
    tag = CAMPAIGN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved campaigns", body = PaginatedCampaignsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the mentor or admin role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_campaigns(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Mentor])
        .await?;

    let service = CampaignService::new(&state.db);

    let campaigns = service.get_paginated(params.page, params.entries).await?;

    Ok((StatusCode::OK, Json(campaigns.into_dto())))
}

/// Get a specific campaign by ID.
///
/// # Access Control
/// - `Mentor` - Mentors and admins can view campaigns
#[utoipa::path(
    get,
    path = "/api/campaigns/{campaign_id}",
    tag = CAMPAIGN_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved campaign", body = CampaignDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the mentor or admin role", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_campaign_by_id(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(campaign_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Mentor])
        .await?;

    let service = CampaignService::new(&state.db);

    let campaign = service.get_by_id(campaign_id).await?;

    match campaign {
        Some(campaign) => Ok((StatusCode::OK, Json(campaign.into_dto()))),
        None => Err(AppError::NotFound("Campaign not found".to_string())),
    }
}

/// Update a campaign's name, dates, and description.
///
/// # Access Control
/// - `Admin` - Only admins can update campaigns
#[utoipa::path(
    put,
    path = "/api/campaigns/{campaign_id}",
    tag = CAMPAIGN_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID")
    ),
    request_body = UpdateCampaignDto,
    responses(
        (status = 200, description = "Successfully updated campaign", body = CampaignDto),
        (status = 400, description = "Invalid campaign data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 409, description = "Campaign name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_campaign(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(campaign_id): Path<i32>,
    Json(payload): Json<UpdateCampaignDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let service = CampaignService::new(&state.db);

    let params = UpdateCampaignParams::from_dto(campaign_id, payload);

    let campaign = service.update(params).await?;

    match campaign {
        Some(campaign) => Ok((StatusCode::OK, Json(campaign.into_dto()))),
        None => Err(AppError::NotFound("Campaign not found".to_string())),
    }
}

/// Delete a campaign along with its interns.
///
/// # Access Control
/// - `Admin` - Only admins can delete campaigns
#[utoipa::path(
    delete,
    path = "/api/campaigns/{campaign_id}",
    tag = CAMPAIGN_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted campaign"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_campaign(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(campaign_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let service = CampaignService::new(&state.db);

    let deleted = service.delete(campaign_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Campaign not found".to_string()))
    }
}
