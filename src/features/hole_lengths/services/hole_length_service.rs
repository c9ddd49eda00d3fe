use sqlx::PgPool;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::hole_lengths::dtos::{
    CreateHoleLengthDto, HoleLengthResponseDto, UpdateHoleLengthDto,
};
use crate::features::hole_lengths::models::HoleLength;
use crate::shared::geo::point_params;

const HOLE_LENGTH_COLUMNS: &str = "hole_length_id, hole_id, tee_id, length, par, \
    ST_X(tee_box_location) AS tee_box_lng, \
    ST_Y(tee_box_location) AS tee_box_lat";

pub struct HoleLengthService {
    pool: PgPool,
}

impl HoleLengthService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<HoleLengthResponseDto>> {
        let query = format!(
            "SELECT {} FROM hole_lengths ORDER BY hole_length_id",
            HOLE_LENGTH_COLUMNS
        );

        let rows = sqlx::query_as::<_, HoleLength>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list hole lengths: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(HoleLengthResponseDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<HoleLengthResponseDto> {
        let query = format!(
            "SELECT {} FROM hole_lengths WHERE hole_length_id = $1",
            HOLE_LENGTH_COLUMNS
        );

        sqlx::query_as::<_, HoleLength>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get hole length {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .map(HoleLengthResponseDto::from)
            .ok_or_else(|| AppError::NotFound("Hole length not found".to_string()))
    }

    pub async fn create(&self, dto: CreateHoleLengthDto) -> Result<HoleLengthResponseDto> {
        let (lng, lat) = point_params(dto.tee_box_location.as_ref());

        let query = format!(
            r#"
            INSERT INTO hole_lengths (hole_id, tee_id, length, par, tee_box_location)
            VALUES (
                $1, $2, $3, $4,
                CASE WHEN $5::float8 IS NULL THEN NULL ELSE ST_SetSRID(ST_MakePoint($5, $6), 4326) END
            )
            RETURNING {}
            "#,
            HOLE_LENGTH_COLUMNS
        );

        let row = sqlx::query_as::<_, HoleLength>(&query)
            .bind(dto.hole_id)
            .bind(dto.tee_id)
            .bind(dto.length)
            .bind(dto.par)
            .bind(lng)
            .bind(lat)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        tracing::info!(
            "Hole length created: id={}, hole_id={}, tee_id={}",
            row.hole_length_id,
            row.hole_id,
            row.tee_id
        );

        Ok(row.into())
    }

    pub async fn update(
        &self,
        id: i64,
        dto: UpdateHoleLengthDto,
    ) -> Result<HoleLengthResponseDto> {
        let (lng, lat) = point_params(dto.tee_box_location.as_ref());

        let query = format!(
            r#"
            UPDATE hole_lengths
            SET hole_id = COALESCE($1, hole_id),
                tee_id = COALESCE($2, tee_id),
                length = COALESCE($3, length),
                par = COALESCE($4, par),
                tee_box_location = CASE
                    WHEN $5::float8 IS NULL THEN tee_box_location
                    ELSE ST_SetSRID(ST_MakePoint($5, $6), 4326)
                END
            WHERE hole_length_id = $7
            RETURNING {}
            "#,
            HOLE_LENGTH_COLUMNS
        );

        sqlx::query_as::<_, HoleLength>(&query)
            .bind(dto.hole_id)
            .bind(dto.tee_id)
            .bind(dto.length)
            .bind(dto.par)
            .bind(lng)
            .bind(lat)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(HoleLengthResponseDto::from)
            .ok_or_else(|| AppError::NotFound("Hole length not found".to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM hole_lengths WHERE hole_length_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Hole length not found".to_string()));
        }

        tracing::info!("Hole length deleted: id={}", id);
        Ok(())
    }
}
