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
        learning_topic::{
            CreateLearningTopicDto, LearningTopicDto, PaginatedLearningTopicsDto,
            UpdateLearningTopicDto,
        },
    },
    error::AppError,
    middleware::auth::{AuthGuard, Claims, Permission},
    model::learning_topic::{CreateLearningTopicParams, UpdateLearningTopicParams},
    service::learning_topic::LearningTopicService,
    state::AppState,
};

/// Tag for grouping learning topic endpoints in OpenAPI documentation
pub static LEARNING_TOPIC_TAG: &str = "learning-topic";

/// Create a learning topic under a speciality.
///
/// # Access Control
/// - `Admin` - Only admins can create learning topics
#[utoipa::path(
    post,
    path = "/api/specialities/{speciality_id}/topics",
    tag = LEARNING_TOPIC_TAG,
    params(
        ("speciality_id" = i32, Path, description = "Parent speciality ID")
    ),
    request_body = CreateLearningTopicDto,
    responses(
        (status = 201, description = "Successfully created learning topic", body = LearningTopicDto),
        (status = 400, description = "Invalid topic data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 404, description = "Speciality not found", body = ErrorDto),
        (status = 409, description = "Topic name already taken in the speciality", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_learning_topic(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(speciality_id): Path<i32>,
    Json(payload): Json<CreateLearningTopicDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let service = LearningTopicService::new(&state.db);

    let params = CreateLearningTopicParams::from_dto(speciality_id, payload);

    let topic = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(topic.into_dto())))
}

/// Get paginated learning topics for a speciality.
///
/// # Access Control
/// - `Mentor` - Mentors and admins can list learning topics
#[utoipa::path(
    get,
    path = "/api/specialities/{speciality_id}/topics",
    tag = LEARNING_TOPIC_TAG,
    params(
        ("speciality_id" = i32, Path, description = "Parent speciality ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved learning topics", body = PaginatedLearningTopicsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the mentor or admin role", body = ErrorDto),
        (status = 404, description = "Speciality not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_learning_topics(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(speciality_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Mentor])
        .await?;

    let service = LearningTopicService::new(&state.db);

    let topics = service
        .get_paginated(speciality_id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(topics.into_dto())))
}

/// Get a specific learning topic.
///
/// Verifies the topic belongs to the speciality in the path.
///
/// # Access Control
/// - `Mentor` - Mentors and admins can view learning topics
#[utoipa::path(
    get,
    path = "/api/specialities/{speciality_id}/topics/{topic_id}",
    tag = LEARNING_TOPIC_TAG,
    params(
        ("speciality_id" = i32, Path, description = "Parent speciality ID"),
        ("topic_id" = i32, Path, description = "Learning topic ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved learning topic", body = LearningTopicDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the mentor or admin role", body = ErrorDto),
        (status = 404, description = "Topic not found in this speciality", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_learning_topic_by_id(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((speciality_id, topic_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Mentor])
        .await?;

    let service = LearningTopicService::new(&state.db);

    let topic = service.get_by_id(speciality_id, topic_id).await?;

    match topic {
        Some(topic) => Ok((StatusCode::OK, Json(topic.into_dto()))),
        None => Err(AppError::NotFound("Learning topic not found".to_string())),
    }
}

/// Update a learning topic's name and description.
///
/// # Access Control
/// - `Admin` - Only admins can update learning topics
#[utoipa::path(
    put,
    path = "/api/specialities/{speciality_id}/topics/{topic_id}",
    tag = LEARNING_TOPIC_TAG,
    params(
        ("speciality_id" = i32, Path, description = "Parent speciality ID"),
        ("topic_id" = i32, Path, description = "Learning topic ID")
    ),
    request_body = UpdateLearningTopicDto,
    responses(
        (status = 200, description = "Successfully updated learning topic", body = LearningTopicDto),
        (status = 400, description = "Invalid topic data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 404, description = "Topic not found in this speciality", body = ErrorDto),
        (status = 409, description = "Topic name already taken in the speciality", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_learning_topic(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((speciality_id, topic_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateLearningTopicDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let service = LearningTopicService::new(&state.db);

    let params = UpdateLearningTopicParams::from_dto(topic_id, speciality_id, payload);

    let topic = service.update(params).await?;

    match topic {
        Some(topic) => Ok((StatusCode::OK, Json(topic.into_dto()))),
        None => Err(AppError::NotFound("Learning topic not found".to_string())),
    }
}

/// Delete a learning topic.
///
/// # Access Control
/// - `Admin` - Only admins can delete learning topics
#[utoipa::path(
    delete,
    path = "/api/specialities/{speciality_id}/topics/{topic_id}",
    tag = LEARNING_TOPIC_TAG,
    params(
        ("speciality_id" = i32, Path, description = "Parent speciality ID"),
        ("topic_id" = i32, Path, description = "Learning topic ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted learning topic"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller lacks the admin role", body = ErrorDto),
        (status = 404, description = "Topic not found in this speciality", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_learning_topic(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((speciality_id, topic_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let service = LearningTopicService::new(&state.db);

    let deleted = service.delete(speciality_id, topic_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Learning topic not found".to_string()))
    }
}
