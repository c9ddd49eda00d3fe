use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::type_of_shots::dtos::{TypeOfShotRequestDto, TypeOfShotResponseDto};
use crate::features::type_of_shots::services::TypeOfShotService;
use crate::shared::types::{deleted, ApiResponse};

#[utoipa::path(
    get,
    path = "/api/type-of-shots",
    responses(
        (status = 200, description = "List of shot types", body = ApiResponse<Vec<TypeOfShotResponseDto>>)
    ),
    tag = "type-of-shots",
    security(("bearer_auth" = []))
)]
pub async fn list_type_of_shots(
    State(service): State<Arc<TypeOfShotService>>,
) -> Result<Json<ApiResponse<Vec<TypeOfShotResponseDto>>>> {
    let rows = service.list().await?;
    Ok(Json(ApiResponse::success(Some(rows), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/type-of-shots/{id}",
    params(("id" = i64, Path, description = "Type of shot ID")),
    responses(
        (status = 200, description = "Shot type found", body = ApiResponse<TypeOfShotResponseDto>),
        (status = 404, description = "Type of shot not found")
    ),
    tag = "type-of-shots",
    security(("bearer_auth" = []))
)]
pub async fn get_type_of_shot(
    State(service): State<Arc<TypeOfShotService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<TypeOfShotResponseDto>>> {
    let row = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(row), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/type-of-shots",
    request_body = TypeOfShotRequestDto,
    responses(
        (status = 201, description = "Shot type created", body = ApiResponse<TypeOfShotResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Shot type already exists")
    ),
    tag = "type-of-shots",
    security(("bearer_auth" = []))
)]
pub async fn create_type_of_shot(
    State(service): State<Arc<TypeOfShotService>>,
    AppJson(dto): AppJson<TypeOfShotRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<TypeOfShotResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let row = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(row), None, None)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/type-of-shots/{id}",
    params(("id" = i64, Path, description = "Type of shot ID")),
    request_body = TypeOfShotRequestDto,
    responses(
        (status = 200, description = "Shot type updated", body = ApiResponse<TypeOfShotResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Type of shot not found")
    ),
    tag = "type-of-shots",
    security(("bearer_auth" = []))
)]
pub async fn update_type_of_shot(
    State(service): State<Arc<TypeOfShotService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<TypeOfShotRequestDto>,
) -> Result<Json<ApiResponse<TypeOfShotResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let row = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(row), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/type-of-shots/{id}",
    params(("id" = i64, Path, description = "Type of shot ID")),
    responses(
        (status = 200, description = "Shot type deleted"),
        (status = 404, description = "Type of shot not found")
    ),
    tag = "type-of-shots",
    security(("bearer_auth" = []))
)]
pub async fn delete_type_of_shot(
    State(service): State<Arc<TypeOfShotService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(deleted("Type of shot")))
}
