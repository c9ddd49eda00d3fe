use std::collections::HashMap;

use sqlx::PgPool;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::hole_stats::dtos::HoleStatsDetailDto;
use crate::features::hole_stats::services::{insert_hole_stats, list_hole_stats_details};
use crate::features::scorecards::dtos::{
    CreateScorecardDto, ScorecardListQuery, ScorecardResponseDto, UpdateScorecardDto,
};
use crate::features::scorecards::models::ScorecardRow;
use crate::features::shots::services::insert_shot;

/// Scorecard header with tee, course and the tee's total length and par
const SCORECARD_SELECT: &str = r#"
    SELECT s.scorecard_id, s.user_id, s.tee_id, s.scorecard_date, s.type_of_round, s.created_at,
           t.course_id, c.course_name, t.tee_name, t.slope_rating, t.course_rating,
           COALESCE(totals.length, 0)::int8 AS tee_length,
           COALESCE(totals.par, 0)::int8 AS par
    FROM scorecards s
    JOIN tees t ON t.tee_id = s.tee_id
    JOIN courses c ON c.course_id = t.course_id
    LEFT JOIN LATERAL (
        SELECT SUM(hl.length) AS length, SUM(hl.par) AS par
        FROM hole_lengths hl
        WHERE hl.tee_id = s.tee_id
    ) totals ON TRUE
"#;

pub struct ScorecardService {
    pool: PgPool,
}

impl ScorecardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach the detailed hole statistics to each header row, keeping row order
    async fn assemble(&self, rows: Vec<ScorecardRow>) -> Result<Vec<ScorecardResponseDto>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|r| r.scorecard_id).collect();
        let details = list_hole_stats_details(&self.pool, &ids).await?;

        let mut by_scorecard: HashMap<i64, Vec<HoleStatsDetailDto>> = HashMap::new();
        for detail in details {
            by_scorecard
                .entry(detail.scorecard_id)
                .or_default()
                .push(detail);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let holes = by_scorecard.remove(&row.scorecard_id).unwrap_or_default();
                ScorecardResponseDto::new(row, holes)
            })
            .collect())
    }

    pub async fn list(&self, query: &ScorecardListQuery) -> Result<(Vec<ScorecardResponseDto>, i64)> {
        let pagination = query.pagination();

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM scorecards WHERE ($1::int8 IS NULL OR user_id = $1)",
        )
        .bind(query.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count scorecards: {:?}", e);
            AppError::Database(e)
        })?;

        let sql = format!(
            r#"
            {}
            WHERE ($1::int8 IS NULL OR s.user_id = $1)
            ORDER BY s.created_at DESC, s.scorecard_id DESC
            LIMIT $2 OFFSET $3
            "#,
            SCORECARD_SELECT
        );

        let rows = sqlx::query_as::<_, ScorecardRow>(&sql)
            .bind(query.user_id)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list scorecards: {:?}", e);
                AppError::Database(e)
            })?;

        let scorecards = self.assemble(rows).await?;
        Ok((scorecards, total))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ScorecardResponseDto> {
        let sql = format!("{} WHERE s.scorecard_id = $1", SCORECARD_SELECT);

        let row = sqlx::query_as::<_, ScorecardRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get scorecard {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound("Scorecard not found".to_string()))?;

        let holes = list_hole_stats_details(&self.pool, &[id]).await?;
        Ok(ScorecardResponseDto::new(row, holes))
    }

    pub async fn owner(&self, id: i64) -> Result<i64> {
        sqlx::query_scalar("SELECT user_id FROM scorecards WHERE scorecard_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Scorecard not found".to_string()))
    }

    /// Create a scorecard with its holes and shots in one transaction
    pub async fn create(&self, user_id: i64, dto: CreateScorecardDto) -> Result<ScorecardResponseDto> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let scorecard_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO scorecards (user_id, tee_id, scorecard_date, type_of_round)
            VALUES ($1, $2, $3, $4)
            RETURNING scorecard_id
            "#,
        )
        .bind(user_id)
        .bind(dto.tee_id)
        .bind(dto.scorecard_date)
        .bind(dto.type_of_round)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let holes = dto.hole_stats.unwrap_or_default();
        let mut shot_count = 0;

        for hole in &holes {
            let stats = insert_hole_stats(&mut *tx, scorecard_id, &hole.stats).await?;

            for shot in hole.shots.iter().flatten() {
                insert_shot(&mut *tx, stats.hole_stats_id, shot).await?;
                shot_count += 1;
            }
        }

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Scorecard created: id={}, user_id={}, holes={}, shots={}",
            scorecard_id,
            user_id,
            holes.len(),
            shot_count
        );

        self.get_by_id(scorecard_id).await
    }

    pub async fn update(&self, id: i64, dto: UpdateScorecardDto) -> Result<ScorecardResponseDto> {
        let updated: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE scorecards
            SET tee_id = COALESCE($1, tee_id),
                scorecard_date = COALESCE($2, scorecard_date),
                type_of_round = COALESCE($3, type_of_round)
            WHERE scorecard_id = $4
            RETURNING scorecard_id
            "#,
        )
        .bind(dto.tee_id)
        .bind(dto.scorecard_date)
        .bind(dto.type_of_round)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match updated {
            Some(id) => self.get_by_id(id).await,
            None => Err(AppError::NotFound("Scorecard not found".to_string())),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM scorecards WHERE scorecard_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Scorecard not found".to_string()));
        }

        tracing::info!("Scorecard deleted: id={}", id);
        Ok(())
    }
}
