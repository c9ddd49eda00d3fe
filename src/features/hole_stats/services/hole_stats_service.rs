use sqlx::{PgPool, Postgres};

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::hole_stats::dtos::{
    CreateHoleStatsDto, HoleStatsDetailDto, HoleStatsInputDto, HoleStatsResponseDto,
    UpdateHoleStatsDto,
};
use crate::features::hole_stats::models::{HoleStats, HoleStatsDetail};
use crate::shared::geo::jsonb_point_sql;

const HOLE_STATS_COLUMNS: &str = "hole_stats_id, scorecard_id, hole_id, score, fairway_hit, \
    green_in_regulation, putts, penalty_strokes, sand_save, up_and_down";

/// Hole statistics with hole number, par on the scorecard's tee and
/// the shots (with club names) ordered by shot number
fn detail_query(filter: &str) -> String {
    format!(
        r#"
        SELECT hs.hole_stats_id, hs.scorecard_id, hs.hole_id, h.hole_number, hl.par,
               hs.score, hs.fairway_hit, hs.green_in_regulation, hs.putts,
               hs.penalty_strokes, hs.sand_save, hs.up_and_down,
               COALESCE((
                   SELECT jsonb_agg(jsonb_build_object(
                       'shotId', sh.shot_id,
                       'shotNumber', sh.shot_number,
                       'clubId', sh.club_id,
                       'clubName', cl.club_name,
                       'typeOfShotId', sh.type_of_shot_id,
                       'leftMiddleRight', sh.left_middle_right,
                       'shortCenterLong', sh.short_center_long,
                       'inHole', sh.in_hole,
                       'locationStart', {start},
                       'locationEnd', {end}
                   ) ORDER BY sh.shot_number, sh.shot_id)
                   FROM shots sh
                   LEFT JOIN clubs cl ON cl.club_id = sh.club_id
                   WHERE sh.hole_stats_id = hs.hole_stats_id
               ), '[]'::jsonb) AS shots
        FROM hole_stats hs
        JOIN scorecards sc ON sc.scorecard_id = hs.scorecard_id
        JOIN holes h ON h.hole_id = hs.hole_id
        LEFT JOIN hole_lengths hl ON hl.hole_id = hs.hole_id AND hl.tee_id = sc.tee_id
        {filter}
        ORDER BY hs.hole_stats_id
        "#,
        start = jsonb_point_sql("sh.location_start"),
        end = jsonb_point_sql("sh.location_end"),
        filter = filter
    )
}

/// Insert one hole's statistics. Takes any executor so a scorecard can
/// be created together with its holes in one transaction.
pub async fn insert_hole_stats<'e, E>(
    executor: E,
    scorecard_id: i64,
    stats: &HoleStatsInputDto,
) -> Result<HoleStats>
where
    E: sqlx::Executor<'e, Database = Postgres>,
{
    let query = format!(
        r#"
        INSERT INTO hole_stats (
            scorecard_id, hole_id, score, fairway_hit, green_in_regulation,
            putts, penalty_strokes, sand_save, up_and_down
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {}
        "#,
        HOLE_STATS_COLUMNS
    );

    sqlx::query_as::<_, HoleStats>(&query)
        .bind(scorecard_id)
        .bind(stats.hole_id)
        .bind(stats.score)
        .bind(stats.fairway_hit)
        .bind(stats.green_in_regulation)
        .bind(stats.putts)
        .bind(stats.penalty_strokes)
        .bind(stats.sand_save)
        .bind(stats.up_and_down)
        .fetch_one(executor)
        .await
        .map_err(map_db_error)
}

/// Detailed hole statistics of several scorecards at once
pub async fn list_hole_stats_details<'e, E>(
    executor: E,
    scorecard_ids: &[i64],
) -> Result<Vec<HoleStatsDetailDto>>
where
    E: sqlx::Executor<'e, Database = Postgres>,
{
    let query = detail_query("WHERE hs.scorecard_id = ANY($1)");

    let rows = sqlx::query_as::<_, HoleStatsDetail>(&query)
        .bind(scorecard_ids)
        .fetch_all(executor)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load hole stats of scorecards: {:?}", e);
            AppError::Database(e)
        })?;

    Ok(rows.into_iter().map(HoleStatsDetailDto::from).collect())
}

pub struct HoleStatsService {
    pool: PgPool,
}

impl HoleStatsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_scorecard(&self, scorecard_id: i64) -> Result<Vec<HoleStatsResponseDto>> {
        let query = format!(
            "SELECT {} FROM hole_stats WHERE scorecard_id = $1 ORDER BY hole_stats_id",
            HOLE_STATS_COLUMNS
        );

        let rows = sqlx::query_as::<_, HoleStats>(&query)
            .bind(scorecard_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to list hole stats of scorecard {}: {:?}",
                    scorecard_id,
                    e
                );
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(HoleStatsResponseDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<HoleStatsDetailDto> {
        let query = detail_query("WHERE hs.hole_stats_id = $1");

        sqlx::query_as::<_, HoleStatsDetail>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get hole stats {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .map(HoleStatsDetailDto::from)
            .ok_or_else(|| AppError::NotFound("Hole stats not found".to_string()))
    }

    /// Owner of a scorecard, for checks before adding hole statistics to it
    pub async fn scorecard_owner(&self, scorecard_id: i64) -> Result<i64> {
        sqlx::query_scalar("SELECT user_id FROM scorecards WHERE scorecard_id = $1")
            .bind(scorecard_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Scorecard not found".to_string()))
    }

    /// Owner of the scorecard a hole statistics record belongs to
    pub async fn owner(&self, id: i64) -> Result<i64> {
        sqlx::query_scalar(
            r#"
            SELECT s.user_id
            FROM hole_stats hs
            JOIN scorecards s ON s.scorecard_id = hs.scorecard_id
            WHERE hs.hole_stats_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound("Hole stats not found".to_string()))
    }

    pub async fn create(&self, dto: CreateHoleStatsDto) -> Result<HoleStatsResponseDto> {
        let stats = insert_hole_stats(&self.pool, dto.scorecard_id, &dto.stats).await?;

        tracing::info!(
            "Hole stats created: id={}, scorecard_id={}, hole_id={}",
            stats.hole_stats_id,
            stats.scorecard_id,
            stats.hole_id
        );

        Ok(stats.into())
    }

    pub async fn update(&self, id: i64, dto: UpdateHoleStatsDto) -> Result<HoleStatsResponseDto> {
        let query = format!(
            r#"
            UPDATE hole_stats
            SET hole_id = COALESCE($1, hole_id),
                score = COALESCE($2, score),
                putts = COALESCE($3, putts),
                fairway_hit = COALESCE($4, fairway_hit),
                green_in_regulation = COALESCE($5, green_in_regulation),
                penalty_strokes = COALESCE($6, penalty_strokes),
                sand_save = COALESCE($7, sand_save),
                up_and_down = COALESCE($8, up_and_down)
            WHERE hole_stats_id = $9
            RETURNING {}
            "#,
            HOLE_STATS_COLUMNS
        );

        sqlx::query_as::<_, HoleStats>(&query)
            .bind(dto.hole_id)
            .bind(dto.score)
            .bind(dto.putts)
            .bind(dto.fairway_hit)
            .bind(dto.green_in_regulation)
            .bind(dto.penalty_strokes)
            .bind(dto.sand_save)
            .bind(dto.up_and_down)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(HoleStatsResponseDto::from)
            .ok_or_else(|| AppError::NotFound("Hole stats not found".to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM hole_stats WHERE hole_stats_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Hole stats not found".to_string()));
        }

        tracing::info!("Hole stats deleted: id={}", id);
        Ok(())
    }
}
