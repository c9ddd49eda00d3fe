use sqlx::PgPool;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::establishments::dtos::{
    CreateEstablishmentDto, EstablishmentResponseDto, UpdateEstablishmentDto,
};
use crate::features::establishments::models::Establishment;
use crate::shared::geo::point_params;
use crate::shared::validation::trim_opt;

/// Establishment columns plus the nested courses and their tees as jsonb
const ESTABLISHMENT_COLUMNS: &str = r#"
    e.establishment_id, e.establishment_name, e.abbreviation, e.establishment_number,
    ST_X(e.location) AS location_lng, ST_Y(e.location) AS location_lat,
    COALESCE((
        SELECT jsonb_agg(jsonb_build_object(
            'courseId', c.course_id,
            'courseName', c.course_name,
            'scorecard', c.scorecard,
            'tees', COALESCE((
                SELECT jsonb_agg(jsonb_build_object(
                    'teeId', t.tee_id,
                    'teeName', t.tee_name,
                    'slopeRating', t.slope_rating,
                    'courseRating', t.course_rating
                ) ORDER BY t.tee_id)
                FROM tees t
                WHERE t.course_id = c.course_id
            ), '[]'::jsonb)
        ) ORDER BY c.course_id)
        FROM courses c
        WHERE c.establishment_id = e.establishment_id
    ), '[]'::jsonb) AS courses
"#;

pub struct EstablishmentService {
    pool: PgPool,
}

impl EstablishmentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<EstablishmentResponseDto>> {
        let query = format!(
            "SELECT {}, NULL::float8 AS distance_meters FROM establishments e ORDER BY e.establishment_id",
            ESTABLISHMENT_COLUMNS
        );

        let rows = sqlx::query_as::<_, Establishment>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list establishments: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(EstablishmentResponseDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<EstablishmentResponseDto> {
        let query = format!(
            "SELECT {}, NULL::float8 AS distance_meters FROM establishments e WHERE e.establishment_id = $1",
            ESTABLISHMENT_COLUMNS
        );

        sqlx::query_as::<_, Establishment>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get establishment {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .map(EstablishmentResponseDto::from)
            .ok_or_else(|| AppError::NotFound("Establishment not found".to_string()))
    }

    /// Establishments within `radius_meters` of the point, nearest first
    pub async fn find_nearby(
        &self,
        lng: f64,
        lat: f64,
        radius_meters: f64,
    ) -> Result<Vec<EstablishmentResponseDto>> {
        let query = format!(
            r#"
            SELECT {}, d.distance_meters
            FROM establishments e
            CROSS JOIN LATERAL (
                SELECT ST_DistanceSphere(e.location, ST_SetSRID(ST_MakePoint($1, $2), 4326)) AS distance_meters
            ) d
            WHERE d.distance_meters <= $3
            ORDER BY d.distance_meters, e.establishment_id
            "#,
            ESTABLISHMENT_COLUMNS
        );

        let rows = sqlx::query_as::<_, Establishment>(&query)
            .bind(lng)
            .bind(lat)
            .bind(radius_meters)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to search establishments near ({}, {}): {:?}", lng, lat, e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(EstablishmentResponseDto::from).collect())
    }

    pub async fn create(&self, dto: CreateEstablishmentDto) -> Result<EstablishmentResponseDto> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO establishments (establishment_name, abbreviation, establishment_number, location)
            VALUES ($1, $2, $3, ST_SetSRID(ST_MakePoint($4, $5), 4326))
            RETURNING establishment_id
            "#,
        )
        .bind(dto.establishment_name.trim())
        .bind(dto.abbreviation.trim())
        .bind(dto.establishment_number)
        .bind(dto.location.lng())
        .bind(dto.location.lat())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        tracing::info!("Establishment created: id={}", id);

        self.get_by_id(id).await
    }

    pub async fn update(
        &self,
        id: i64,
        dto: UpdateEstablishmentDto,
    ) -> Result<EstablishmentResponseDto> {
        let (lng, lat) = point_params(dto.location.as_ref());

        let updated: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE establishments
            SET establishment_name = COALESCE($1, establishment_name),
                abbreviation = COALESCE($2, abbreviation),
                establishment_number = COALESCE($3, establishment_number),
                location = CASE
                    WHEN $4::float8 IS NULL THEN location
                    ELSE ST_SetSRID(ST_MakePoint($4, $5), 4326)
                END
            WHERE establishment_id = $6
            RETURNING establishment_id
            "#,
        )
        .bind(trim_opt(dto.establishment_name))
        .bind(trim_opt(dto.abbreviation))
        .bind(dto.establishment_number)
        .bind(lng)
        .bind(lat)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match updated {
            Some(id) => self.get_by_id(id).await,
            None => Err(AppError::NotFound("Establishment not found".to_string())),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM establishments WHERE establishment_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Establishment not found".to_string()));
        }

        tracing::info!("Establishment deleted: id={}", id);
        Ok(())
    }
}
