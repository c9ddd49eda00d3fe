use sqlx::{PgPool, Postgres};

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::shots::dtos::{CreateShotDto, ShotInputDto, ShotResponseDto, UpdateShotDto};
use crate::features::shots::models::Shot;
use crate::shared::geo::point_params;

const SHOT_COLUMNS: &str = "shot_id, hole_stats_id, club_id, type_of_shot_id, shot_number, \
    left_middle_right, short_center_long, in_hole, \
    ST_X(location_start) AS start_lng, ST_Y(location_start) AS start_lat, \
    ST_X(location_end) AS end_lng, ST_Y(location_end) AS end_lat";

/// Insert one shot. Takes any executor so a scorecard can be created
/// together with its shots in one transaction.
pub async fn insert_shot<'e, E>(executor: E, hole_stats_id: i64, shot: &ShotInputDto) -> Result<Shot>
where
    E: sqlx::Executor<'e, Database = Postgres>,
{
    let (start_lng, start_lat) = point_params(shot.location_start.as_ref());
    let (end_lng, end_lat) = point_params(shot.location_end.as_ref());

    let query = format!(
        r#"
        INSERT INTO shots (
            hole_stats_id, club_id, type_of_shot_id, shot_number,
            left_middle_right, short_center_long, in_hole,
            location_start, location_end
        )
        VALUES (
            $1, $2, $3, $4, $5, $6, $7,
            CASE WHEN $8::float8 IS NULL THEN NULL ELSE ST_SetSRID(ST_MakePoint($8, $9), 4326) END,
            CASE WHEN $10::float8 IS NULL THEN NULL ELSE ST_SetSRID(ST_MakePoint($10, $11), 4326) END
        )
        RETURNING {}
        "#,
        SHOT_COLUMNS
    );

    sqlx::query_as::<_, Shot>(&query)
        .bind(hole_stats_id)
        .bind(shot.club_id)
        .bind(shot.type_of_shot_id)
        .bind(shot.shot_number)
        .bind(shot.left_middle_right)
        .bind(shot.short_center_long)
        .bind(shot.in_hole)
        .bind(start_lng)
        .bind(start_lat)
        .bind(end_lng)
        .bind(end_lat)
        .fetch_one(executor)
        .await
        .map_err(map_db_error)
}

pub struct ShotService {
    pool: PgPool,
}

impl ShotService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<ShotResponseDto>> {
        let query = format!(
            "SELECT {} FROM shots ORDER BY hole_stats_id, shot_number, shot_id",
            SHOT_COLUMNS
        );

        let shots = sqlx::query_as::<_, Shot>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list shots: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(shots.into_iter().map(ShotResponseDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ShotResponseDto> {
        let query = format!("SELECT {} FROM shots WHERE shot_id = $1", SHOT_COLUMNS);

        sqlx::query_as::<_, Shot>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get shot {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .map(ShotResponseDto::from)
            .ok_or_else(|| AppError::NotFound("Shot not found".to_string()))
    }

    /// Shot ids of one hole, in playing order
    pub async fn list_ids_by_hole_stats(&self, hole_stats_id: i64) -> Result<Vec<i64>> {
        sqlx::query_scalar(
            "SELECT shot_id FROM shots WHERE hole_stats_id = $1 ORDER BY shot_number, shot_id",
        )
        .bind(hole_stats_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list shot ids of hole stats {}: {:?}", hole_stats_id, e);
            AppError::Database(e)
        })
    }

    /// Owner of the scorecard a hole statistics record belongs to
    pub async fn hole_stats_owner(&self, hole_stats_id: i64) -> Result<i64> {
        sqlx::query_scalar(
            r#"
            SELECT s.user_id
            FROM hole_stats hs
            JOIN scorecards s ON s.scorecard_id = hs.scorecard_id
            WHERE hs.hole_stats_id = $1
            "#,
        )
        .bind(hole_stats_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound("Hole stats not found".to_string()))
    }

    /// Owner of the scorecard a shot belongs to
    pub async fn owner(&self, id: i64) -> Result<i64> {
        sqlx::query_scalar(
            r#"
            SELECT s.user_id
            FROM shots sh
            JOIN hole_stats hs ON hs.hole_stats_id = sh.hole_stats_id
            JOIN scorecards s ON s.scorecard_id = hs.scorecard_id
            WHERE sh.shot_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound("Shot not found".to_string()))
    }

    pub async fn create(&self, dto: CreateShotDto) -> Result<ShotResponseDto> {
        let shot = insert_shot(&self.pool, dto.hole_stats_id, &dto.shot).await?;

        tracing::info!(
            "Shot created: id={}, hole_stats_id={}, number={}",
            shot.shot_id,
            shot.hole_stats_id,
            shot.shot_number
        );

        Ok(shot.into())
    }

    pub async fn update(&self, id: i64, dto: UpdateShotDto) -> Result<ShotResponseDto> {
        let (start_lng, start_lat) = point_params(dto.location_start.as_ref());
        let (end_lng, end_lat) = point_params(dto.location_end.as_ref());

        let query = format!(
            r#"
            UPDATE shots
            SET club_id = COALESCE($1, club_id),
                type_of_shot_id = COALESCE($2, type_of_shot_id),
                shot_number = COALESCE($3, shot_number),
                left_middle_right = COALESCE($4, left_middle_right),
                short_center_long = COALESCE($5, short_center_long),
                in_hole = COALESCE($6, in_hole),
                location_start = CASE
                    WHEN $7::float8 IS NULL THEN location_start
                    ELSE ST_SetSRID(ST_MakePoint($7, $8), 4326)
                END,
                location_end = CASE
                    WHEN $9::float8 IS NULL THEN location_end
                    ELSE ST_SetSRID(ST_MakePoint($9, $10), 4326)
                END
            WHERE shot_id = $11
            RETURNING {}
            "#,
            SHOT_COLUMNS
        );

        sqlx::query_as::<_, Shot>(&query)
            .bind(dto.club_id)
            .bind(dto.type_of_shot_id)
            .bind(dto.shot_number)
            .bind(dto.left_middle_right)
            .bind(dto.short_center_long)
            .bind(dto.in_hole)
            .bind(start_lng)
            .bind(start_lat)
            .bind(end_lng)
            .bind(end_lat)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(ShotResponseDto::from)
            .ok_or_else(|| AppError::NotFound("Shot not found".to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM shots WHERE shot_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Shot not found".to_string()));
        }

        tracing::info!("Shot deleted: id={}", id);
        Ok(())
    }
}
