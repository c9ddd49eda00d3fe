use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::user_clubs::dtos::{
    CreateUserClubDto, UpdateUserClubDto, UserClubResponseDto,
};
use crate::features::user_clubs::services::UserClubService;
use crate::shared::types::{deleted, ApiResponse};

/// List all bag entries
#[utoipa::path(
    get,
    path = "/api/user-clubs",
    responses(
        (status = 200, description = "Bag entries", body = ApiResponse<Vec<UserClubResponseDto>>)
    ),
    tag = "user-clubs",
    security(("bearer_auth" = []))
)]
pub async fn list_user_clubs(
    State(service): State<Arc<UserClubService>>,
) -> Result<Json<ApiResponse<Vec<UserClubResponseDto>>>> {
    let user_clubs = service.list().await?;
    Ok(Json(ApiResponse::success(Some(user_clubs), None, None)))
}

/// Get a bag entry
#[utoipa::path(
    get,
    path = "/api/user-clubs/{id}",
    params(("id" = i64, Path, description = "User club ID")),
    responses(
        (status = 200, description = "Bag entry", body = ApiResponse<UserClubResponseDto>),
        (status = 404, description = "User club not found")
    ),
    tag = "user-clubs",
    security(("bearer_auth" = []))
)]
pub async fn get_user_club(
    State(service): State<Arc<UserClubService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<UserClubResponseDto>>> {
    let user_club = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(user_club), None, None)))
}

/// Add a club to a bag. `userId` defaults to the caller.
#[utoipa::path(
    post,
    path = "/api/user-clubs",
    request_body = CreateUserClubDto,
    responses(
        (status = 201, description = "Club added", body = ApiResponse<UserClubResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not the owner"),
        (status = 409, description = "Club already in this bag")
    ),
    tag = "user-clubs",
    security(("bearer_auth" = []))
)]
pub async fn create_user_club(
    user: AuthenticatedUser,
    State(service): State<Arc<UserClubService>>,
    AppJson(dto): AppJson<CreateUserClubDto>,
) -> Result<(StatusCode, Json<ApiResponse<UserClubResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let owner_id = dto.user_id.unwrap_or(user.user_id);
    user.ensure_can_manage(owner_id)?;

    let user_club = service.create(owner_id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(user_club), None, None)),
    ))
}

/// Update the in-bag flag and shot counters (owner or admin)
#[utoipa::path(
    put,
    path = "/api/user-clubs/{id}",
    params(("id" = i64, Path, description = "User club ID")),
    request_body = UpdateUserClubDto,
    responses(
        (status = 200, description = "Bag entry updated", body = ApiResponse<UserClubResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "User club not found")
    ),
    tag = "user-clubs",
    security(("bearer_auth" = []))
)]
pub async fn update_user_club(
    user: AuthenticatedUser,
    State(service): State<Arc<UserClubService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateUserClubDto>,
) -> Result<Json<ApiResponse<UserClubResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let existing = service.get_by_id(id).await?;
    user.ensure_can_manage(existing.user_id)?;

    let user_club = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(user_club), None, None)))
}

/// Remove a bag entry (owner or admin)
#[utoipa::path(
    delete,
    path = "/api/user-clubs/{id}",
    params(("id" = i64, Path, description = "User club ID")),
    responses(
        (status = 200, description = "Bag entry deleted"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "User club not found")
    ),
    tag = "user-clubs",
    security(("bearer_auth" = []))
)]
pub async fn delete_user_club(
    user: AuthenticatedUser,
    State(service): State<Arc<UserClubService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    let existing = service.get_by_id(id).await?;
    user.ensure_can_manage(existing.user_id)?;

    service.delete(id).await?;
    Ok(Json(deleted("User club")))
}
