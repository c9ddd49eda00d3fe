use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::auth::password::hash_password_blocking;
use crate::features::hcp_history::dtos::HcpHistoryResponseDto;
use crate::features::hcp_history::services::{insert_hcp_history, list_hcp_history_for_user};
use crate::features::user_clubs::dtos::UserClubResponseDto;
use crate::features::user_clubs::services::{list_user_clubs_for_user, upsert_bag_club};
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto, UserResponseDto};
use crate::features::users::models::User;
use crate::shared::constants::DEFAULT_HCP_TENTHS;
use crate::shared::types::PaginationQuery;

const USER_COLUMNS: &str =
    "user_id, user_name, email, password, role, hcp, created_at, updated_at";

pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, params: &PaginationQuery) -> Result<(Vec<UserResponseDto>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let query = format!(
            "SELECT {} FROM users ORDER BY user_id LIMIT $1 OFFSET $2",
            USER_COLUMNS
        );
        let users = sqlx::query_as::<_, User>(&query)
            .bind(params.limit())
            .bind(params.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list users: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((users.into_iter().map(UserResponseDto::from).collect(), total))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<UserResponseDto> {
        self.find_by_id(id)
            .await?
            .map(UserResponseDto::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE user_id = $1", USER_COLUMNS);
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get user {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    /// Lookup used by login; emails are matched case-insensitively
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let query = format!(
            "SELECT {} FROM users WHERE LOWER(email) = LOWER($1)",
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email.trim())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up user by email: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Register a player together with the first handicap history entry
    pub async fn create(&self, dto: CreateUserDto) -> Result<UserResponseDto> {
        let hcp = dto.hcp.unwrap_or_else(|| Decimal::new(DEFAULT_HCP_TENTHS, 1));
        let password_hash = hash_password_blocking(dto.password).await?;

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let query = format!(
            r#"
            INSERT INTO users (user_name, email, password, hcp)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(dto.username.trim())
            .bind(dto.email.trim())
            .bind(&password_hash)
            .bind(hcp)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

        insert_hcp_history(&mut *tx, user.user_id, hcp, Utc::now().date_naive()).await?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!("User registered: id={}, username={}", user.user_id, user.user_name);

        Ok(user.into())
    }

    /// Partial profile update. Bag changes and the handicap history entry are
    /// written in the same transaction as the profile row.
    pub async fn update(&self, id: i64, dto: UpdateUserDto) -> Result<UserResponseDto> {
        if dto.role.is_some() {
            return Err(AppError::BadRequest(
                "Cannot update role via this endpoint".to_string(),
            ));
        }

        let password_hash = match dto.password {
            Some(password) => Some(hash_password_blocking(password).await?),
            None => None,
        };

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let query = format!(
            r#"
            UPDATE users
            SET user_name = COALESCE($1, user_name),
                email = COALESCE($2, email),
                password = COALESCE($3, password),
                hcp = COALESCE($4, hcp),
                updated_at = NOW()
            WHERE user_id = $5
            RETURNING {}
            "#,
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(dto.username.as_deref().map(str::trim))
            .bind(dto.email.as_deref().map(str::trim))
            .bind(password_hash)
            .bind(dto.hcp)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if let Some(hcp) = dto.hcp {
            insert_hcp_history(&mut *tx, id, hcp, Utc::now().date_naive()).await?;
        }

        for club in dto.clubs.unwrap_or_default() {
            upsert_bag_club(&mut *tx, id, club.club_id, club.in_bag).await?;
        }

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!("User updated: id={}", id);

        Ok(user.into())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("User deleted: id={}", id);
        Ok(())
    }

    pub async fn hcp_history(&self, id: i64) -> Result<Vec<HcpHistoryResponseDto>> {
        self.ensure_exists(id).await?;
        list_hcp_history_for_user(&self.pool, id).await
    }

    pub async fn clubs(&self, id: i64, in_bag_only: bool) -> Result<Vec<UserClubResponseDto>> {
        self.ensure_exists(id).await?;
        list_user_clubs_for_user(&self.pool, id, in_bag_only).await
    }

    async fn ensure_exists(&self, id: i64) -> Result<()> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE user_id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

        if !exists {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        Ok(())
    }
}
