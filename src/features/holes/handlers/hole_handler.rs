use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::holes::dtos::{
    CreateHoleDto, CreateHolesDto, CreateHolesResponseDto, HoleResponseDto, UpdateHoleDto,
};
use crate::features::holes::services::HoleService;
use crate::shared::types::{deleted, ApiResponse};

#[utoipa::path(
    get,
    path = "/api/holes",
    responses(
        (status = 200, description = "List of holes", body = ApiResponse<Vec<HoleResponseDto>>)
    ),
    tag = "holes",
    security(("bearer_auth" = []))
)]
pub async fn list_holes(
    State(service): State<Arc<HoleService>>,
) -> Result<Json<ApiResponse<Vec<HoleResponseDto>>>> {
    let holes = service.list().await?;
    Ok(Json(ApiResponse::success(Some(holes), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/holes/{id}",
    params(("id" = i64, Path, description = "Hole ID")),
    responses(
        (status = 200, description = "Hole found", body = ApiResponse<HoleResponseDto>),
        (status = 404, description = "Hole not found")
    ),
    tag = "holes",
    security(("bearer_auth" = []))
)]
pub async fn get_hole(
    State(service): State<Arc<HoleService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<HoleResponseDto>>> {
    let hole = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(hole), None, None)))
}

/// Look up a hole by its course and number
#[utoipa::path(
    get,
    path = "/api/holes/course/{course_id}/number/{hole_number}",
    params(
        ("course_id" = i64, Path, description = "Course ID"),
        ("hole_number" = i32, Path, description = "Hole number on the course")
    ),
    responses(
        (status = 200, description = "Hole found", body = ApiResponse<HoleResponseDto>),
        (status = 404, description = "Hole not found")
    ),
    tag = "holes",
    security(("bearer_auth" = []))
)]
pub async fn get_hole_by_course_and_number(
    State(service): State<Arc<HoleService>>,
    AppPath((course_id, hole_number)): AppPath<(i64, i32)>,
) -> Result<Json<ApiResponse<HoleResponseDto>>> {
    let hole = service
        .get_by_course_and_number(course_id, hole_number)
        .await?;
    Ok(Json(ApiResponse::success(Some(hole), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/holes",
    request_body = CreateHoleDto,
    responses(
        (status = 201, description = "Hole created", body = ApiResponse<HoleResponseDto>),
        (status = 400, description = "Validation error or unknown course"),
        (status = 409, description = "Hole number already exists on the course")
    ),
    tag = "holes",
    security(("bearer_auth" = []))
)]
pub async fn create_hole(
    State(service): State<Arc<HoleService>>,
    AppJson(dto): AppJson<CreateHoleDto>,
) -> Result<(StatusCode, Json<ApiResponse<HoleResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let hole = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(hole), None, None)),
    ))
}

/// Create several holes at once. Numbers a course already has are skipped.
#[utoipa::path(
    post,
    path = "/api/holes/multi",
    request_body = CreateHolesDto,
    responses(
        (status = 201, description = "Holes created", body = ApiResponse<CreateHolesResponseDto>),
        (status = 400, description = "Validation error or unknown course")
    ),
    tag = "holes",
    security(("bearer_auth" = []))
)]
pub async fn create_holes(
    State(service): State<Arc<HoleService>>,
    AppJson(dto): AppJson<CreateHolesDto>,
) -> Result<(StatusCode, Json<ApiResponse<CreateHolesResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let result = service.create_many(dto.holes).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(result), None, None)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/holes/{id}",
    params(("id" = i64, Path, description = "Hole ID")),
    request_body = UpdateHoleDto,
    responses(
        (status = 200, description = "Hole updated", body = ApiResponse<HoleResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Hole not found"),
        (status = 409, description = "Hole number already exists on the course")
    ),
    tag = "holes",
    security(("bearer_auth" = []))
)]
pub async fn update_hole(
    State(service): State<Arc<HoleService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateHoleDto>,
) -> Result<Json<ApiResponse<HoleResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let hole = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(hole), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/holes/{id}",
    params(("id" = i64, Path, description = "Hole ID")),
    responses(
        (status = 200, description = "Hole deleted"),
        (status = 404, description = "Hole not found"),
        (status = 409, description = "Hole has recorded statistics")
    ),
    tag = "holes",
    security(("bearer_auth" = []))
)]
pub async fn delete_hole(
    State(service): State<Arc<HoleService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(deleted("Hole")))
}
