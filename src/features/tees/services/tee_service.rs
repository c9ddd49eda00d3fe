use sqlx::PgPool;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::tees::dtos::{CreateTeeDto, TeeDto, TeeResponseDto, UpdateTeeDto};
use crate::features::tees::models::{Tee, TeeDetail};
use crate::shared::geo::jsonb_point_sql;
use crate::shared::validation::trim_opt;

const TEE_COLUMNS: &str = "tee_id, course_id, tee_name, slope_rating, course_rating";

fn detail_query(filter: &str) -> String {
    format!(
        r#"
        SELECT t.tee_id, t.course_id, t.tee_name, t.slope_rating, t.course_rating,
               COALESCE(SUM(hl.length), 0)::int8 AS course_length,
               COALESCE(SUM(hl.par), 0)::int8 AS par,
               COALESCE(
                   jsonb_agg(jsonb_build_object(
                       'holeId', h.hole_id,
                       'holeNumber', h.hole_number,
                       'length', hl.length,
                       'par', hl.par,
                       'teeBoxLocation', {tee_box}
                   ) ORDER BY h.hole_number) FILTER (WHERE hl.hole_length_id IS NOT NULL),
                   '[]'::jsonb
               ) AS hole_lengths
        FROM tees t
        LEFT JOIN hole_lengths hl ON hl.tee_id = t.tee_id
        LEFT JOIN holes h ON h.hole_id = hl.hole_id
        {filter}
        GROUP BY t.tee_id
        ORDER BY t.tee_id
        "#,
        tee_box = jsonb_point_sql("hl.tee_box_location"),
        filter = filter
    )
}

pub struct TeeService {
    pool: PgPool,
}

impl TeeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<TeeResponseDto>> {
        let query = detail_query("");

        let tees = sqlx::query_as::<_, TeeDetail>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list tees: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(tees.into_iter().map(TeeResponseDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<TeeResponseDto> {
        let query = detail_query("WHERE t.tee_id = $1");

        sqlx::query_as::<_, TeeDetail>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get tee {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .map(TeeResponseDto::from)
            .ok_or_else(|| AppError::NotFound("Tee not found".to_string()))
    }

    pub async fn list_by_course(&self, course_id: i64) -> Result<Vec<TeeDto>> {
        let query = format!(
            "SELECT {} FROM tees WHERE course_id = $1 ORDER BY tee_id",
            TEE_COLUMNS
        );

        let tees = sqlx::query_as::<_, Tee>(&query)
            .bind(course_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list tees of course {}: {:?}", course_id, e);
                AppError::Database(e)
            })?;

        Ok(tees.into_iter().map(TeeDto::from).collect())
    }

    pub async fn create(&self, dto: CreateTeeDto) -> Result<TeeResponseDto> {
        let query = format!(
            r#"
            INSERT INTO tees (tee_name, course_id, slope_rating, course_rating)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            TEE_COLUMNS
        );

        let tee = sqlx::query_as::<_, Tee>(&query)
            .bind(dto.tee_name.trim())
            .bind(dto.course_id)
            .bind(dto.slope_rating)
            .bind(dto.course_rating)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        tracing::info!("Tee created: id={}, course_id={}", tee.tee_id, tee.course_id);

        self.get_by_id(tee.tee_id).await
    }

    pub async fn update(&self, id: i64, dto: UpdateTeeDto) -> Result<TeeResponseDto> {
        let updated: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE tees
            SET tee_name = COALESCE($1, tee_name),
                course_id = COALESCE($2, course_id),
                slope_rating = COALESCE($3, slope_rating),
                course_rating = COALESCE($4, course_rating)
            WHERE tee_id = $5
            RETURNING tee_id
            "#,
        )
        .bind(trim_opt(dto.tee_name))
        .bind(dto.course_id)
        .bind(dto.slope_rating)
        .bind(dto.course_rating)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match updated {
            Some(id) => self.get_by_id(id).await,
            None => Err(AppError::NotFound("Tee not found".to_string())),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM tees WHERE tee_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Tee not found".to_string()));
        }

        tracing::info!("Tee deleted: id={}", id);
        Ok(())
    }
}
