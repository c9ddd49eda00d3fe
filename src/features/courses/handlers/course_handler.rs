use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::courses::dtos::{CourseResponseDto, CreateCourseDto, UpdateCourseDto};
use crate::features::courses::services::CourseService;
use crate::shared::types::{deleted, ApiResponse};

/// List courses with their tees
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "List of courses", body = ApiResponse<Vec<CourseResponseDto>>)
    ),
    tag = "courses",
    security(("bearer_auth" = []))
)]
pub async fn list_courses(
    State(service): State<Arc<CourseService>>,
) -> Result<Json<ApiResponse<Vec<CourseResponseDto>>>> {
    let courses = service.list().await?;
    Ok(Json(ApiResponse::success(Some(courses), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course found", body = ApiResponse<CourseResponseDto>),
        (status = 404, description = "Course not found")
    ),
    tag = "courses",
    security(("bearer_auth" = []))
)]
pub async fn get_course(
    State(service): State<Arc<CourseService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<CourseResponseDto>>> {
    let course = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(course), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created", body = ApiResponse<CourseResponseDto>),
        (status = 400, description = "Validation error or unknown establishment")
    ),
    tag = "courses",
    security(("bearer_auth" = []))
)]
pub async fn create_course(
    State(service): State<Arc<CourseService>>,
    AppJson(dto): AppJson<CreateCourseDto>,
) -> Result<(StatusCode, Json<ApiResponse<CourseResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let course = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(course), None, None)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated", body = ApiResponse<CourseResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Course not found")
    ),
    tag = "courses",
    security(("bearer_auth" = []))
)]
pub async fn update_course(
    State(service): State<Arc<CourseService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateCourseDto>,
) -> Result<Json<ApiResponse<CourseResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let course = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(course), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course deleted"),
        (status = 404, description = "Course not found"),
        (status = 409, description = "Course is still used by scorecards")
    ),
    tag = "courses",
    security(("bearer_auth" = []))
)]
pub async fn delete_course(
    State(service): State<Arc<CourseService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(deleted("Course")))
}
