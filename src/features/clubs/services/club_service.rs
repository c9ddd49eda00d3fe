use sqlx::PgPool;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::clubs::dtos::{ClubResponseDto, CreateClubDto, UpdateClubDto};
use crate::features::clubs::models::Club;
use crate::shared::validation::trim_opt;

pub struct ClubService {
    pool: PgPool,
}

impl ClubService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<ClubResponseDto>> {
        let clubs = sqlx::query_as::<_, Club>(
            "SELECT club_id, club_name FROM clubs ORDER BY club_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list clubs: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(clubs.into_iter().map(ClubResponseDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ClubResponseDto> {
        sqlx::query_as::<_, Club>("SELECT club_id, club_name FROM clubs WHERE club_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get club {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .map(ClubResponseDto::from)
            .ok_or_else(|| AppError::NotFound("Club not found".to_string()))
    }

    pub async fn create(&self, dto: CreateClubDto) -> Result<ClubResponseDto> {
        let club = sqlx::query_as::<_, Club>(
            "INSERT INTO clubs (club_name) VALUES ($1) RETURNING club_id, club_name",
        )
        .bind(dto.club_name.trim())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        tracing::info!("Club created: id={}, name={}", club.club_id, club.club_name);

        Ok(club.into())
    }

    pub async fn update(&self, id: i64, dto: UpdateClubDto) -> Result<ClubResponseDto> {
        sqlx::query_as::<_, Club>(
            r#"
            UPDATE clubs
            SET club_name = COALESCE($1, club_name)
            WHERE club_id = $2
            RETURNING club_id, club_name
            "#,
        )
        .bind(trim_opt(dto.club_name))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .map(ClubResponseDto::from)
        .ok_or_else(|| AppError::NotFound("Club not found".to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM clubs WHERE club_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Club not found".to_string()));
        }

        tracing::info!("Club deleted: id={}", id);
        Ok(())
    }
}
