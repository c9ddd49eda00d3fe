use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::shots::dtos::{CreateShotDto, ShotResponseDto, UpdateShotDto};
use crate::features::shots::services::ShotService;
use crate::shared::types::{deleted, ApiResponse};

#[utoipa::path(
    get,
    path = "/api/shots",
    responses(
        (status = 200, description = "List of shots", body = ApiResponse<Vec<ShotResponseDto>>)
    ),
    tag = "shots",
    security(("bearer_auth" = []))
)]
pub async fn list_shots(
    State(service): State<Arc<ShotService>>,
) -> Result<Json<ApiResponse<Vec<ShotResponseDto>>>> {
    let shots = service.list().await?;
    Ok(Json(ApiResponse::success(Some(shots), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/shots/{id}",
    params(("id" = i64, Path, description = "Shot ID")),
    responses(
        (status = 200, description = "Shot found", body = ApiResponse<ShotResponseDto>),
        (status = 404, description = "Shot not found")
    ),
    tag = "shots",
    security(("bearer_auth" = []))
)]
pub async fn get_shot(
    State(service): State<Arc<ShotService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<ShotResponseDto>>> {
    let shot = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(shot), None, None)))
}

/// Shot ids of one hole statistics record, in playing order
#[utoipa::path(
    get,
    path = "/api/shots/hole-stats/{hole_stats_id}/ids",
    params(("hole_stats_id" = i64, Path, description = "Hole stats ID")),
    responses(
        (status = 200, description = "Shot ids", body = ApiResponse<Vec<i64>>)
    ),
    tag = "shots",
    security(("bearer_auth" = []))
)]
pub async fn list_shot_ids_by_hole_stats(
    State(service): State<Arc<ShotService>>,
    AppPath(hole_stats_id): AppPath<i64>,
) -> Result<Json<ApiResponse<Vec<i64>>>> {
    let ids = service.list_ids_by_hole_stats(hole_stats_id).await?;
    Ok(Json(ApiResponse::success(Some(ids), None, None)))
}

/// Record a shot (scorecard owner or admin)
#[utoipa::path(
    post,
    path = "/api/shots",
    request_body = CreateShotDto,
    responses(
        (status = 201, description = "Shot created", body = ApiResponse<ShotResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not the scorecard owner"),
        (status = 404, description = "Hole stats not found")
    ),
    tag = "shots",
    security(("bearer_auth" = []))
)]
pub async fn create_shot(
    user: AuthenticatedUser,
    State(service): State<Arc<ShotService>>,
    AppJson(dto): AppJson<CreateShotDto>,
) -> Result<(StatusCode, Json<ApiResponse<ShotResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let owner_id = service.hole_stats_owner(dto.hole_stats_id).await?;
    user.ensure_can_manage(owner_id)?;

    let shot = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(shot), None, None)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/shots/{id}",
    params(("id" = i64, Path, description = "Shot ID")),
    request_body = UpdateShotDto,
    responses(
        (status = 200, description = "Shot updated", body = ApiResponse<ShotResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not the scorecard owner"),
        (status = 404, description = "Shot not found")
    ),
    tag = "shots",
    security(("bearer_auth" = []))
)]
pub async fn update_shot(
    user: AuthenticatedUser,
    State(service): State<Arc<ShotService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateShotDto>,
) -> Result<Json<ApiResponse<ShotResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let owner_id = service.owner(id).await?;
    user.ensure_can_manage(owner_id)?;

    let shot = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(shot), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/shots/{id}",
    params(("id" = i64, Path, description = "Shot ID")),
    responses(
        (status = 200, description = "Shot deleted"),
        (status = 403, description = "Not the scorecard owner"),
        (status = 404, description = "Shot not found")
    ),
    tag = "shots",
    security(("bearer_auth" = []))
)]
pub async fn delete_shot(
    user: AuthenticatedUser,
    State(service): State<Arc<ShotService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    let owner_id = service.owner(id).await?;
    user.ensure_can_manage(owner_id)?;

    service.delete(id).await?;
    Ok(Json(deleted("Shot")))
}
