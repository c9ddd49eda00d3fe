use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::auth::guards::RequireAdmin;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::hcp_history::dtos::HcpHistoryResponseDto;
use crate::features::user_clubs::dtos::UserClubResponseDto;
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto, UserResponseDto};
use crate::features::users::services::UserService;
use crate::shared::types::{deleted, ApiResponse, Meta, PaginationQuery};

/// List users with pagination
#[utoipa::path(
    get,
    path = "/api/users",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Users retrieved", body = ApiResponse<Vec<UserResponseDto>>)
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn list_users(
    State(service): State<Arc<UserService>>,
    AppQuery(params): AppQuery<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let (users, total) = service.list(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(users),
        None,
        Some(Meta { total }),
    )))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = ApiResponse<UserResponseDto>),
        (status = 404, description = "User not found")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn get_user(
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    let user = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(user), None, None)))
}

/// Get the caller's own profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Own profile", body = ApiResponse<UserResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn get_me(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    let profile = service.get_by_id(user.user_id).await?;
    Ok(Json(ApiResponse::success(Some(profile), None, None)))
}

/// Register a new player
///
/// Public endpoint. The handicap defaults to 54.0 and seeds the handicap history.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username or email already taken")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<CreateUserDto>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(user),
            Some("User registered".to_string()),
            None,
        )),
    ))
}

/// Update a user (self or admin)
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error or role change attempted"),
        (status = 403, description = "Not allowed to update this user"),
        (status = 404, description = "User not found")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn update_user(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    user.ensure_can_manage(id)?;

    let updated = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

/// Update the caller's own profile
#[utoipa::path(
    put,
    path = "/api/users/me",
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error or role change attempted")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn update_me(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(user.user_id, dto).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

/// Delete a user (admin only)
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "User not found")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn delete_user(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(deleted("User")))
}

/// Delete the caller's own account
#[utoipa::path(
    delete,
    path = "/api/users/me",
    responses((status = 200, description = "Account deleted")),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn delete_me(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(user.user_id).await?;
    Ok(Json(deleted("User")))
}

/// Handicap history of a user, oldest first
#[utoipa::path(
    get,
    path = "/api/users/{id}/hcp-history",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Handicap history", body = ApiResponse<Vec<HcpHistoryResponseDto>>),
        (status = 404, description = "User not found")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn get_user_hcp_history(
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<Vec<HcpHistoryResponseDto>>>> {
    let history = service.hcp_history(id).await?;
    Ok(Json(ApiResponse::success(Some(history), None, None)))
}

/// All clubs a user owns
#[utoipa::path(
    get,
    path = "/api/users/{id}/clubs",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User clubs", body = ApiResponse<Vec<UserClubResponseDto>>),
        (status = 404, description = "User not found")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn get_user_clubs(
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<Vec<UserClubResponseDto>>>> {
    let clubs = service.clubs(id, false).await?;
    Ok(Json(ApiResponse::success(Some(clubs), None, None)))
}

/// Clubs currently in the user's bag
#[utoipa::path(
    get,
    path = "/api/users/{id}/clubs/in-bag",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Clubs in the bag", body = ApiResponse<Vec<UserClubResponseDto>>),
        (status = 404, description = "User not found")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn get_user_clubs_in_bag(
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<Vec<UserClubResponseDto>>>> {
    let clubs = service.clubs(id, true).await?;
    Ok(Json(ApiResponse::success(Some(clubs), None, None)))
}
