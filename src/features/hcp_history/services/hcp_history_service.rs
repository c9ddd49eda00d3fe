use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres};

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::hcp_history::dtos::{
    CreateHcpHistoryDto, HcpHistoryResponseDto, UpdateHcpHistoryDto,
};
use crate::features::hcp_history::models::HcpHistory;

const HCP_HISTORY_COLUMNS: &str = "hcp_history_id, user_id, hcp, hcp_date";

/// Insert one history entry. Takes any executor so user registration and
/// profile updates can record the entry inside their own transaction.
pub async fn insert_hcp_history<'e, E>(
    executor: E,
    user_id: i64,
    hcp: Decimal,
    hcp_date: NaiveDate,
) -> Result<HcpHistory>
where
    E: sqlx::Executor<'e, Database = Postgres>,
{
    let query = format!(
        "INSERT INTO hcp_histories (user_id, hcp, hcp_date) VALUES ($1, $2, $3) RETURNING {}",
        HCP_HISTORY_COLUMNS
    );

    sqlx::query_as::<_, HcpHistory>(&query)
        .bind(user_id)
        .bind(hcp)
        .bind(hcp_date)
        .fetch_one(executor)
        .await
        .map_err(map_db_error)
}

/// All entries of one user, oldest first
pub async fn list_hcp_history_for_user<'e, E>(
    executor: E,
    user_id: i64,
) -> Result<Vec<HcpHistoryResponseDto>>
where
    E: sqlx::Executor<'e, Database = Postgres>,
{
    let query = format!(
        "SELECT {} FROM hcp_histories WHERE user_id = $1 ORDER BY hcp_date, hcp_history_id",
        HCP_HISTORY_COLUMNS
    );

    let rows = sqlx::query_as::<_, HcpHistory>(&query)
        .bind(user_id)
        .fetch_all(executor)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list hcp history for user {}: {:?}", user_id, e);
            AppError::Database(e)
        })?;

    Ok(rows.into_iter().map(HcpHistoryResponseDto::from).collect())
}

pub struct HcpHistoryService {
    pool: PgPool,
}

impl HcpHistoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<HcpHistoryResponseDto> {
        let query = format!(
            "SELECT {} FROM hcp_histories WHERE hcp_history_id = $1",
            HCP_HISTORY_COLUMNS
        );

        sqlx::query_as::<_, HcpHistory>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get hcp history {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .map(HcpHistoryResponseDto::from)
            .ok_or_else(|| AppError::NotFound("Hcp history not found".to_string()))
    }

    pub async fn create(&self, dto: CreateHcpHistoryDto) -> Result<HcpHistoryResponseDto> {
        let entry = insert_hcp_history(&self.pool, dto.user_id, dto.hcp, dto.hcp_date).await?;

        tracing::info!(
            "Hcp history recorded: id={}, user_id={}",
            entry.hcp_history_id,
            entry.user_id
        );

        Ok(entry.into())
    }

    pub async fn update(&self, id: i64, dto: UpdateHcpHistoryDto) -> Result<HcpHistoryResponseDto> {
        let query = format!(
            r#"
            UPDATE hcp_histories
            SET hcp = COALESCE($1, hcp),
                hcp_date = COALESCE($2, hcp_date)
            WHERE hcp_history_id = $3
            RETURNING {}
            "#,
            HCP_HISTORY_COLUMNS
        );

        sqlx::query_as::<_, HcpHistory>(&query)
            .bind(dto.hcp)
            .bind(dto.hcp_date)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(HcpHistoryResponseDto::from)
            .ok_or_else(|| AppError::NotFound("Hcp history not found".to_string()))
    }
}
