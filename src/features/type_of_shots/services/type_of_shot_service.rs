use sqlx::PgPool;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::type_of_shots::dtos::{TypeOfShotRequestDto, TypeOfShotResponseDto};
use crate::features::type_of_shots::models::TypeOfShot;

pub struct TypeOfShotService {
    pool: PgPool,
}

impl TypeOfShotService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<TypeOfShotResponseDto>> {
        let rows = sqlx::query_as::<_, TypeOfShot>(
            "SELECT type_of_shot_id, type_of_shot FROM type_of_shots ORDER BY type_of_shot_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list types of shot: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(TypeOfShotResponseDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<TypeOfShotResponseDto> {
        sqlx::query_as::<_, TypeOfShot>(
            "SELECT type_of_shot_id, type_of_shot FROM type_of_shots WHERE type_of_shot_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get type of shot {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .map(TypeOfShotResponseDto::from)
        .ok_or_else(|| AppError::NotFound("Type of shot not found".to_string()))
    }

    pub async fn create(&self, dto: TypeOfShotRequestDto) -> Result<TypeOfShotResponseDto> {
        let row = sqlx::query_as::<_, TypeOfShot>(
            "INSERT INTO type_of_shots (type_of_shot) VALUES ($1) RETURNING type_of_shot_id, type_of_shot",
        )
        .bind(dto.type_of_shot.trim())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        tracing::info!("Type of shot created: id={}", row.type_of_shot_id);
        Ok(row.into())
    }

    pub async fn update(&self, id: i64, dto: TypeOfShotRequestDto) -> Result<TypeOfShotResponseDto> {
        sqlx::query_as::<_, TypeOfShot>(
            r#"
            UPDATE type_of_shots
            SET type_of_shot = $1
            WHERE type_of_shot_id = $2
            RETURNING type_of_shot_id, type_of_shot
            "#,
        )
        .bind(dto.type_of_shot.trim())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .map(TypeOfShotResponseDto::from)
        .ok_or_else(|| AppError::NotFound("Type of shot not found".to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM type_of_shots WHERE type_of_shot_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Type of shot not found".to_string()));
        }

        tracing::info!("Type of shot deleted: id={}", id);
        Ok(())
    }
}
