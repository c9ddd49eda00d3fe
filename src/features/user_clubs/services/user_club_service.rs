use sqlx::{PgPool, Postgres};

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::user_clubs::dtos::{
    CreateUserClubDto, UpdateUserClubDto, UserClubResponseDto,
};
use crate::features::user_clubs::models::UserClub;

const USER_CLUB_COLUMNS: &str = r#"
    uc.user_club_id, uc.user_id, uc.club_id, c.club_name, uc.in_bag,
    uc.full_shots, uc.average_distance,
    uc.left_shots, uc.middle_shots, uc.right_shots,
    uc.short_shots, uc.center_shots, uc.long_shots
"#;

/// Put a club in a player's bag, or flip its in-bag flag when already there
pub async fn upsert_bag_club<'e, E>(
    executor: E,
    user_id: i64,
    club_id: i64,
    in_bag: Option<bool>,
) -> Result<()>
where
    E: sqlx::Executor<'e, Database = Postgres>,
{
    sqlx::query(
        r#"
        INSERT INTO user_clubs (user_id, club_id, in_bag)
        VALUES ($1, $2, COALESCE($3, TRUE))
        ON CONFLICT (user_id, club_id)
        DO UPDATE SET in_bag = COALESCE($3, user_clubs.in_bag)
        "#,
    )
    .bind(user_id)
    .bind(club_id)
    .bind(in_bag)
    .execute(executor)
    .await
    .map_err(map_db_error)?;

    Ok(())
}

/// Bag entries of one player, optionally only the clubs currently in the bag
pub async fn list_user_clubs_for_user<'e, E>(
    executor: E,
    user_id: i64,
    in_bag_only: bool,
) -> Result<Vec<UserClubResponseDto>>
where
    E: sqlx::Executor<'e, Database = Postgres>,
{
    let query = format!(
        r#"
        SELECT {}
        FROM user_clubs uc
        JOIN clubs c ON c.club_id = uc.club_id
        WHERE uc.user_id = $1 AND ($2 = FALSE OR uc.in_bag)
        ORDER BY c.club_name
        "#,
        USER_CLUB_COLUMNS
    );

    let rows = sqlx::query_as::<_, UserClub>(&query)
        .bind(user_id)
        .bind(in_bag_only)
        .fetch_all(executor)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list clubs of user {}: {:?}", user_id, e);
            AppError::Database(e)
        })?;

    Ok(rows.into_iter().map(UserClubResponseDto::from).collect())
}

pub struct UserClubService {
    pool: PgPool,
}

impl UserClubService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<UserClubResponseDto>> {
        let query = format!(
            r#"
            SELECT {}
            FROM user_clubs uc
            JOIN clubs c ON c.club_id = uc.club_id
            ORDER BY uc.user_club_id
            "#,
            USER_CLUB_COLUMNS
        );

        let rows = sqlx::query_as::<_, UserClub>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list user clubs: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(UserClubResponseDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<UserClubResponseDto> {
        let query = format!(
            r#"
            SELECT {}
            FROM user_clubs uc
            JOIN clubs c ON c.club_id = uc.club_id
            WHERE uc.user_club_id = $1
            "#,
            USER_CLUB_COLUMNS
        );

        sqlx::query_as::<_, UserClub>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get user club {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .map(UserClubResponseDto::from)
            .ok_or_else(|| AppError::NotFound("User club not found".to_string()))
    }

    /// `user_id` is resolved by the handler (explicit or the caller)
    pub async fn create(
        &self,
        user_id: i64,
        dto: CreateUserClubDto,
    ) -> Result<UserClubResponseDto> {
        let query = format!(
            r#"
            WITH uc AS (
                INSERT INTO user_clubs (user_id, club_id, in_bag)
                VALUES ($1, $2, COALESCE($3, TRUE))
                RETURNING *
            )
            SELECT {}
            FROM uc
            JOIN clubs c ON c.club_id = uc.club_id
            "#,
            USER_CLUB_COLUMNS
        );

        let user_club = sqlx::query_as::<_, UserClub>(&query)
            .bind(user_id)
            .bind(dto.club_id)
            .bind(dto.in_bag)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        tracing::info!(
            "Club {} added to bag of user {}",
            user_club.club_id,
            user_club.user_id
        );

        Ok(user_club.into())
    }

    pub async fn update(&self, id: i64, dto: UpdateUserClubDto) -> Result<UserClubResponseDto> {
        let query = format!(
            r#"
            WITH uc AS (
                UPDATE user_clubs
                SET in_bag = COALESCE($1, in_bag),
                    full_shots = COALESCE($2, full_shots),
                    average_distance = COALESCE($3, average_distance),
                    left_shots = COALESCE($4, left_shots),
                    middle_shots = COALESCE($5, middle_shots),
                    right_shots = COALESCE($6, right_shots),
                    short_shots = COALESCE($7, short_shots),
                    center_shots = COALESCE($8, center_shots),
                    long_shots = COALESCE($9, long_shots)
                WHERE user_club_id = $10
                RETURNING *
            )
            SELECT {}
            FROM uc
            JOIN clubs c ON c.club_id = uc.club_id
            "#,
            USER_CLUB_COLUMNS
        );

        sqlx::query_as::<_, UserClub>(&query)
            .bind(dto.in_bag)
            .bind(dto.full_shots)
            .bind(dto.average_distance)
            .bind(dto.left_shots)
            .bind(dto.middle_shots)
            .bind(dto.right_shots)
            .bind(dto.short_shots)
            .bind(dto.center_shots)
            .bind(dto.long_shots)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(UserClubResponseDto::from)
            .ok_or_else(|| AppError::NotFound("User club not found".to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM user_clubs WHERE user_club_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User club not found".to_string()));
        }

        tracing::info!("User club deleted: id={}", id);
        Ok(())
    }
}
