use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::establishments::dtos::{
    CreateEstablishmentDto, EstablishmentResponseDto, NearbyQuery, UpdateEstablishmentDto,
};
use crate::features::establishments::services::EstablishmentService;
use crate::shared::constants::{DEFAULT_SEARCH_RADIUS_METERS, MAX_SEARCH_RADIUS_METERS};
use crate::shared::geo::validate_coordinates;
use crate::shared::types::{deleted, ApiResponse};

/// List establishments with their courses and tees
#[utoipa::path(
    get,
    path = "/api/establishments",
    responses(
        (status = 200, description = "List of establishments", body = ApiResponse<Vec<EstablishmentResponseDto>>)
    ),
    tag = "establishments",
    security(("bearer_auth" = []))
)]
pub async fn list_establishments(
    State(service): State<Arc<EstablishmentService>>,
) -> Result<Json<ApiResponse<Vec<EstablishmentResponseDto>>>> {
    let establishments = service.list().await?;
    Ok(Json(ApiResponse::success(Some(establishments), None, None)))
}

/// Get an establishment with its courses and tees
#[utoipa::path(
    get,
    path = "/api/establishments/{id}",
    params(("id" = i64, Path, description = "Establishment ID")),
    responses(
        (status = 200, description = "Establishment found", body = ApiResponse<EstablishmentResponseDto>),
        (status = 404, description = "Establishment not found")
    ),
    tag = "establishments",
    security(("bearer_auth" = []))
)]
pub async fn get_establishment(
    State(service): State<Arc<EstablishmentService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<EstablishmentResponseDto>>> {
    let establishment = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(establishment), None, None)))
}

/// Find establishments near a point, nearest first
#[utoipa::path(
    get,
    path = "/api/establishments/location/{lng}/{lat}",
    params(
        ("lng" = f64, Path, description = "Longitude"),
        ("lat" = f64, Path, description = "Latitude"),
        NearbyQuery
    ),
    responses(
        (status = 200, description = "Nearby establishments", body = ApiResponse<Vec<EstablishmentResponseDto>>),
        (status = 400, description = "Invalid coordinates or radius")
    ),
    tag = "establishments",
    security(("bearer_auth" = []))
)]
pub async fn find_establishments_nearby(
    State(service): State<Arc<EstablishmentService>>,
    AppPath((lng, lat)): AppPath<(f64, f64)>,
    AppQuery(query): AppQuery<NearbyQuery>,
) -> Result<Json<ApiResponse<Vec<EstablishmentResponseDto>>>> {
    validate_coordinates(&[lng, lat])
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let radius = query.radius.unwrap_or(DEFAULT_SEARCH_RADIUS_METERS);
    if !radius.is_finite() || radius <= 0.0 || radius > MAX_SEARCH_RADIUS_METERS {
        return Err(AppError::Validation(format!(
            "Radius must be greater than 0 and at most {} metres",
            MAX_SEARCH_RADIUS_METERS
        )));
    }

    let establishments = service.find_nearby(lng, lat, radius).await?;
    Ok(Json(ApiResponse::success(Some(establishments), None, None)))
}

/// Create an establishment
#[utoipa::path(
    post,
    path = "/api/establishments",
    request_body = CreateEstablishmentDto,
    responses(
        (status = 201, description = "Establishment created", body = ApiResponse<EstablishmentResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "establishments",
    security(("bearer_auth" = []))
)]
pub async fn create_establishment(
    State(service): State<Arc<EstablishmentService>>,
    AppJson(dto): AppJson<CreateEstablishmentDto>,
) -> Result<(StatusCode, Json<ApiResponse<EstablishmentResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let establishment = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(establishment), None, None)),
    ))
}

/// Partially update an establishment
#[utoipa::path(
    put,
    path = "/api/establishments/{id}",
    params(("id" = i64, Path, description = "Establishment ID")),
    request_body = UpdateEstablishmentDto,
    responses(
        (status = 200, description = "Establishment updated", body = ApiResponse<EstablishmentResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Establishment not found")
    ),
    tag = "establishments",
    security(("bearer_auth" = []))
)]
pub async fn update_establishment(
    State(service): State<Arc<EstablishmentService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateEstablishmentDto>,
) -> Result<Json<ApiResponse<EstablishmentResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let establishment = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(establishment), None, None)))
}

/// Delete an establishment and its courses
#[utoipa::path(
    delete,
    path = "/api/establishments/{id}",
    params(("id" = i64, Path, description = "Establishment ID")),
    responses(
        (status = 200, description = "Establishment deleted"),
        (status = 404, description = "Establishment not found"),
        (status = 409, description = "Scorecards still reference its tees")
    ),
    tag = "establishments",
    security(("bearer_auth" = []))
)]
pub async fn delete_establishment(
    State(service): State<Arc<EstablishmentService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(deleted("Establishment")))
}
