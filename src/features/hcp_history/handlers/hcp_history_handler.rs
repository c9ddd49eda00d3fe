use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::hcp_history::dtos::{
    CreateHcpHistoryDto, HcpHistoryResponseDto, UpdateHcpHistoryDto,
};
use crate::features::hcp_history::services::HcpHistoryService;
use crate::shared::types::ApiResponse;

/// Get a handicap history entry
#[utoipa::path(
    get,
    path = "/api/hcp-history/{id}",
    params(("id" = i64, Path, description = "Hcp history ID")),
    responses(
        (status = 200, description = "Entry found", body = ApiResponse<HcpHistoryResponseDto>),
        (status = 404, description = "Hcp history not found")
    ),
    tag = "hcp-history",
    security(("bearer_auth" = []))
)]
pub async fn get_hcp_history(
    State(service): State<Arc<HcpHistoryService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<HcpHistoryResponseDto>>> {
    let entry = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(entry), None, None)))
}

/// Record a handicap for a player (self or admin)
#[utoipa::path(
    post,
    path = "/api/hcp-history",
    request_body = CreateHcpHistoryDto,
    responses(
        (status = 201, description = "Entry created", body = ApiResponse<HcpHistoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not the owner")
    ),
    tag = "hcp-history",
    security(("bearer_auth" = []))
)]
pub async fn create_hcp_history(
    user: AuthenticatedUser,
    State(service): State<Arc<HcpHistoryService>>,
    AppJson(dto): AppJson<CreateHcpHistoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<HcpHistoryResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    user.ensure_can_manage(dto.user_id)?;

    let entry = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(entry), None, None)),
    ))
}

/// Update a handicap history entry (owner or admin)
#[utoipa::path(
    put,
    path = "/api/hcp-history/{id}",
    params(("id" = i64, Path, description = "Hcp history ID")),
    request_body = UpdateHcpHistoryDto,
    responses(
        (status = 200, description = "Entry updated", body = ApiResponse<HcpHistoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Hcp history not found")
    ),
    tag = "hcp-history",
    security(("bearer_auth" = []))
)]
pub async fn update_hcp_history(
    user: AuthenticatedUser,
    State(service): State<Arc<HcpHistoryService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateHcpHistoryDto>,
) -> Result<Json<ApiResponse<HcpHistoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let existing = service.get_by_id(id).await?;
    user.ensure_can_manage(existing.user_id)?;

    let entry = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(entry), None, None)))
}
