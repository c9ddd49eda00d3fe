use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::hole_stats::dtos::{
    CreateHoleStatsDto, HoleStatsDetailDto, HoleStatsQuery, HoleStatsResponseDto,
    UpdateHoleStatsDto,
};
use crate::features::hole_stats::services::HoleStatsService;
use crate::shared::types::{deleted, ApiResponse};

/// Hole statistics of one scorecard
#[utoipa::path(
    get,
    path = "/api/hole-stats",
    params(HoleStatsQuery),
    responses(
        (status = 200, description = "Hole statistics", body = ApiResponse<Vec<HoleStatsResponseDto>>),
        (status = 400, description = "Missing scorecardId")
    ),
    tag = "hole-stats",
    security(("bearer_auth" = []))
)]
pub async fn list_hole_stats(
    State(service): State<Arc<HoleStatsService>>,
    AppQuery(query): AppQuery<HoleStatsQuery>,
) -> Result<Json<ApiResponse<Vec<HoleStatsResponseDto>>>> {
    let stats = service.list_by_scorecard(query.scorecard_id).await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

/// Get hole statistics with their shots
#[utoipa::path(
    get,
    path = "/api/hole-stats/{id}",
    params(("id" = i64, Path, description = "Hole stats ID")),
    responses(
        (status = 200, description = "Hole statistics found", body = ApiResponse<HoleStatsDetailDto>),
        (status = 404, description = "Hole stats not found")
    ),
    tag = "hole-stats",
    security(("bearer_auth" = []))
)]
pub async fn get_hole_stats(
    State(service): State<Arc<HoleStatsService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<HoleStatsDetailDto>>> {
    let stats = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

/// Record a hole on a scorecard (scorecard owner or admin)
#[utoipa::path(
    post,
    path = "/api/hole-stats",
    request_body = CreateHoleStatsDto,
    responses(
        (status = 201, description = "Hole statistics created", body = ApiResponse<HoleStatsResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not the scorecard owner"),
        (status = 404, description = "Scorecard not found")
    ),
    tag = "hole-stats",
    security(("bearer_auth" = []))
)]
pub async fn create_hole_stats(
    user: AuthenticatedUser,
    State(service): State<Arc<HoleStatsService>>,
    AppJson(dto): AppJson<CreateHoleStatsDto>,
) -> Result<(StatusCode, Json<ApiResponse<HoleStatsResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let owner_id = service.scorecard_owner(dto.scorecard_id).await?;
    user.ensure_can_manage(owner_id)?;

    let stats = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(stats), None, None)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/hole-stats/{id}",
    params(("id" = i64, Path, description = "Hole stats ID")),
    request_body = UpdateHoleStatsDto,
    responses(
        (status = 200, description = "Hole statistics updated", body = ApiResponse<HoleStatsResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not the scorecard owner"),
        (status = 404, description = "Hole stats not found")
    ),
    tag = "hole-stats",
    security(("bearer_auth" = []))
)]
pub async fn update_hole_stats(
    user: AuthenticatedUser,
    State(service): State<Arc<HoleStatsService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateHoleStatsDto>,
) -> Result<Json<ApiResponse<HoleStatsResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let owner_id = service.owner(id).await?;
    user.ensure_can_manage(owner_id)?;

    let stats = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/hole-stats/{id}",
    params(("id" = i64, Path, description = "Hole stats ID")),
    responses(
        (status = 200, description = "Hole statistics deleted"),
        (status = 403, description = "Not the scorecard owner"),
        (status = 404, description = "Hole stats not found")
    ),
    tag = "hole-stats",
    security(("bearer_auth" = []))
)]
pub async fn delete_hole_stats(
    user: AuthenticatedUser,
    State(service): State<Arc<HoleStatsService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    let owner_id = service.owner(id).await?;
    user.ensure_can_manage(owner_id)?;

    service.delete(id).await?;
    Ok(Json(deleted("Hole stats")))
}
