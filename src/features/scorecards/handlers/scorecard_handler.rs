use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::scorecards::dtos::{
    CreateScorecardDto, ScorecardListQuery, ScorecardResponseDto, UpdateScorecardDto,
};
use crate::features::scorecards::services::ScorecardService;
use crate::shared::types::{deleted, ApiResponse, Meta};

/// List scorecards, newest first
#[utoipa::path(
    get,
    path = "/api/scorecards",
    params(ScorecardListQuery),
    responses(
        (status = 200, description = "Scorecards retrieved", body = ApiResponse<Vec<ScorecardResponseDto>>)
    ),
    tag = "scorecards",
    security(("bearer_auth" = []))
)]
pub async fn list_scorecards(
    State(service): State<Arc<ScorecardService>>,
    AppQuery(query): AppQuery<ScorecardListQuery>,
) -> Result<Json<ApiResponse<Vec<ScorecardResponseDto>>>> {
    let (scorecards, total) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(
        Some(scorecards),
        None,
        Some(Meta { total }),
    )))
}

#[utoipa::path(
    get,
    path = "/api/scorecards/{id}",
    params(("id" = i64, Path, description = "Scorecard ID")),
    responses(
        (status = 200, description = "Scorecard found", body = ApiResponse<ScorecardResponseDto>),
        (status = 404, description = "Scorecard not found")
    ),
    tag = "scorecards",
    security(("bearer_auth" = []))
)]
pub async fn get_scorecard(
    State(service): State<Arc<ScorecardService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<ScorecardResponseDto>>> {
    let scorecard = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(scorecard), None, None)))
}

/// Create a scorecard for the caller, optionally with holes and shots
#[utoipa::path(
    post,
    path = "/api/scorecards",
    request_body = CreateScorecardDto,
    responses(
        (status = 201, description = "Scorecard created", body = ApiResponse<ScorecardResponseDto>),
        (status = 400, description = "Validation error or unknown tee, hole or club")
    ),
    tag = "scorecards",
    security(("bearer_auth" = []))
)]
pub async fn create_scorecard(
    user: AuthenticatedUser,
    State(service): State<Arc<ScorecardService>>,
    AppJson(dto): AppJson<CreateScorecardDto>,
) -> Result<(StatusCode, Json<ApiResponse<ScorecardResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let scorecard = service.create(user.user_id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(scorecard), None, None)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/scorecards/{id}",
    params(("id" = i64, Path, description = "Scorecard ID")),
    request_body = UpdateScorecardDto,
    responses(
        (status = 200, description = "Scorecard updated", body = ApiResponse<ScorecardResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Scorecard not found")
    ),
    tag = "scorecards",
    security(("bearer_auth" = []))
)]
pub async fn update_scorecard(
    user: AuthenticatedUser,
    State(service): State<Arc<ScorecardService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateScorecardDto>,
) -> Result<Json<ApiResponse<ScorecardResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let owner_id = service.owner(id).await?;
    user.ensure_can_manage(owner_id)?;

    let scorecard = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(scorecard), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/scorecards/{id}",
    params(("id" = i64, Path, description = "Scorecard ID")),
    responses(
        (status = 200, description = "Scorecard deleted"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Scorecard not found")
    ),
    tag = "scorecards",
    security(("bearer_auth" = []))
)]
pub async fn delete_scorecard(
    user: AuthenticatedUser,
    State(service): State<Arc<ScorecardService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    let owner_id = service.owner(id).await?;
    user.ensure_can_manage(owner_id)?;

    service.delete(id).await?;
    Ok(Json(deleted("Scorecard")))
}
