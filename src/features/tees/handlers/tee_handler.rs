use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::tees::dtos::{CreateTeeDto, TeeDto, TeeResponseDto, UpdateTeeDto};
use crate::features::tees::services::TeeService;
use crate::shared::types::{deleted, ApiResponse};

/// List tees with course length, par and hole lengths
#[utoipa::path(
    get,
    path = "/api/tees",
    responses(
        (status = 200, description = "List of tees", body = ApiResponse<Vec<TeeResponseDto>>)
    ),
    tag = "tees",
    security(("bearer_auth" = []))
)]
pub async fn list_tees(
    State(service): State<Arc<TeeService>>,
) -> Result<Json<ApiResponse<Vec<TeeResponseDto>>>> {
    let tees = service.list().await?;
    Ok(Json(ApiResponse::success(Some(tees), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/tees/{id}",
    params(("id" = i64, Path, description = "Tee ID")),
    responses(
        (status = 200, description = "Tee found", body = ApiResponse<TeeResponseDto>),
        (status = 404, description = "Tee not found")
    ),
    tag = "tees",
    security(("bearer_auth" = []))
)]
pub async fn get_tee(
    State(service): State<Arc<TeeService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<TeeResponseDto>>> {
    let tee = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(tee), None, None)))
}

/// Tees of one course, without hole data
#[utoipa::path(
    get,
    path = "/api/tees/course/{course_id}",
    params(("course_id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Tees of the course", body = ApiResponse<Vec<TeeDto>>)
    ),
    tag = "tees",
    security(("bearer_auth" = []))
)]
pub async fn list_tees_by_course(
    State(service): State<Arc<TeeService>>,
    AppPath(course_id): AppPath<i64>,
) -> Result<Json<ApiResponse<Vec<TeeDto>>>> {
    let tees = service.list_by_course(course_id).await?;
    Ok(Json(ApiResponse::success(Some(tees), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/tees",
    request_body = CreateTeeDto,
    responses(
        (status = 201, description = "Tee created", body = ApiResponse<TeeResponseDto>),
        (status = 400, description = "Validation error or unknown course")
    ),
    tag = "tees",
    security(("bearer_auth" = []))
)]
pub async fn create_tee(
    State(service): State<Arc<TeeService>>,
    AppJson(dto): AppJson<CreateTeeDto>,
) -> Result<(StatusCode, Json<ApiResponse<TeeResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let tee = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(tee), None, None)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/tees/{id}",
    params(("id" = i64, Path, description = "Tee ID")),
    request_body = UpdateTeeDto,
    responses(
        (status = 200, description = "Tee updated", body = ApiResponse<TeeResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Tee not found")
    ),
    tag = "tees",
    security(("bearer_auth" = []))
)]
pub async fn update_tee(
    State(service): State<Arc<TeeService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateTeeDto>,
) -> Result<Json<ApiResponse<TeeResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let tee = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(tee), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/tees/{id}",
    params(("id" = i64, Path, description = "Tee ID")),
    responses(
        (status = 200, description = "Tee deleted"),
        (status = 404, description = "Tee not found"),
        (status = 409, description = "Tee is used by scorecards")
    ),
    tag = "tees",
    security(("bearer_auth" = []))
)]
pub async fn delete_tee(
    State(service): State<Arc<TeeService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(deleted("Tee")))
}
