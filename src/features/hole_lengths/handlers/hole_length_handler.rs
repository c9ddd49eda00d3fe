use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::hole_lengths::dtos::{
    CreateHoleLengthDto, HoleLengthResponseDto, UpdateHoleLengthDto,
};
use crate::features::hole_lengths::services::HoleLengthService;
use crate::shared::types::{deleted, ApiResponse};

#[utoipa::path(
    get,
    path = "/api/hole-lengths",
    responses(
        (status = 200, description = "List of hole lengths", body = ApiResponse<Vec<HoleLengthResponseDto>>)
    ),
    tag = "hole-lengths",
    security(("bearer_auth" = []))
)]
pub async fn list_hole_lengths(
    State(service): State<Arc<HoleLengthService>>,
) -> Result<Json<ApiResponse<Vec<HoleLengthResponseDto>>>> {
    let rows = service.list().await?;
    Ok(Json(ApiResponse::success(Some(rows), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/hole-lengths/{id}",
    params(("id" = i64, Path, description = "Hole length ID")),
    responses(
        (status = 200, description = "Hole length found", body = ApiResponse<HoleLengthResponseDto>),
        (status = 404, description = "Hole length not found")
    ),
    tag = "hole-lengths",
    security(("bearer_auth" = []))
)]
pub async fn get_hole_length(
    State(service): State<Arc<HoleLengthService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<HoleLengthResponseDto>>> {
    let row = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(row), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/hole-lengths",
    request_body = CreateHoleLengthDto,
    responses(
        (status = 201, description = "Hole length created", body = ApiResponse<HoleLengthResponseDto>),
        (status = 400, description = "Validation error or unknown hole/tee"),
        (status = 409, description = "Hole already has a length for this tee")
    ),
    tag = "hole-lengths",
    security(("bearer_auth" = []))
)]
pub async fn create_hole_length(
    State(service): State<Arc<HoleLengthService>>,
    AppJson(dto): AppJson<CreateHoleLengthDto>,
) -> Result<(StatusCode, Json<ApiResponse<HoleLengthResponseDto>>)> {
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
    path = "/api/hole-lengths/{id}",
    params(("id" = i64, Path, description = "Hole length ID")),
    request_body = UpdateHoleLengthDto,
    responses(
        (status = 200, description = "Hole length updated", body = ApiResponse<HoleLengthResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Hole length not found")
    ),
    tag = "hole-lengths",
    security(("bearer_auth" = []))
)]
pub async fn update_hole_length(
    State(service): State<Arc<HoleLengthService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateHoleLengthDto>,
) -> Result<Json<ApiResponse<HoleLengthResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let row = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(row), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/hole-lengths/{id}",
    params(("id" = i64, Path, description = "Hole length ID")),
    responses(
        (status = 200, description = "Hole length deleted"),
        (status = 404, description = "Hole length not found")
    ),
    tag = "hole-lengths",
    security(("bearer_auth" = []))
)]
pub async fn delete_hole_length(
    State(service): State<Arc<HoleLengthService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(deleted("Hole length")))
}
