use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::clubs::dtos::{ClubResponseDto, CreateClubDto, UpdateClubDto};
use crate::features::clubs::services::ClubService;
use crate::shared::types::{deleted, ApiResponse};

/// List all clubs
#[utoipa::path(
    get,
    path = "/api/clubs",
    responses(
        (status = 200, description = "List of clubs", body = ApiResponse<Vec<ClubResponseDto>>)
    ),
    tag = "clubs",
    security(("bearer_auth" = []))
)]
pub async fn list_clubs(
    State(service): State<Arc<ClubService>>,
) -> Result<Json<ApiResponse<Vec<ClubResponseDto>>>> {
    let clubs = service.list().await?;
    Ok(Json(ApiResponse::success(Some(clubs), None, None)))
}

/// Get club by ID
#[utoipa::path(
    get,
    path = "/api/clubs/{id}",
    params(("id" = i64, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Club found", body = ApiResponse<ClubResponseDto>),
        (status = 404, description = "Club not found")
    ),
    tag = "clubs",
    security(("bearer_auth" = []))
)]
pub async fn get_club(
    State(service): State<Arc<ClubService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<ClubResponseDto>>> {
    let club = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(club), None, None)))
}

/// Create a club
#[utoipa::path(
    post,
    path = "/api/clubs",
    request_body = CreateClubDto,
    responses(
        (status = 201, description = "Club created", body = ApiResponse<ClubResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Club name already exists")
    ),
    tag = "clubs",
    security(("bearer_auth" = []))
)]
pub async fn create_club(
    State(service): State<Arc<ClubService>>,
    AppJson(dto): AppJson<CreateClubDto>,
) -> Result<(StatusCode, Json<ApiResponse<ClubResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let club = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(club), None, None)),
    ))
}

/// Update a club
#[utoipa::path(
    put,
    path = "/api/clubs/{id}",
    params(("id" = i64, Path, description = "Club ID")),
    request_body = UpdateClubDto,
    responses(
        (status = 200, description = "Club updated", body = ApiResponse<ClubResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Club not found"),
        (status = 409, description = "Club name already exists")
    ),
    tag = "clubs",
    security(("bearer_auth" = []))
)]
pub async fn update_club(
    State(service): State<Arc<ClubService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateClubDto>,
) -> Result<Json<ApiResponse<ClubResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let club = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(club), None, None)))
}

/// Delete a club
#[utoipa::path(
    delete,
    path = "/api/clubs/{id}",
    params(("id" = i64, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Club deleted"),
        (status = 404, description = "Club not found")
    ),
    tag = "clubs",
    security(("bearer_auth" = []))
)]
pub async fn delete_club(
    State(service): State<Arc<ClubService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(deleted("Club")))
}
