use sqlx::{PgPool, Postgres};

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::holes::dtos::{
    CreateHoleDto, CreateHolesResponseDto, HoleResponseDto, SkippedHoleDto, UpdateHoleDto,
};
use crate::features::holes::models::Hole;
use crate::shared::geo::point_params;

const HOLE_COLUMNS: &str = "hole_id, course_id, hole_number, handicap, \
    ST_X(green_center_location) AS green_center_lng, \
    ST_Y(green_center_location) AS green_center_lat";

/// Insert one hole. With `skip_existing` a clash on (course, number)
/// yields `None` instead of a conflict error.
async fn insert_hole<'e, E>(
    executor: E,
    dto: &CreateHoleDto,
    skip_existing: bool,
) -> Result<Option<Hole>>
where
    E: sqlx::Executor<'e, Database = Postgres>,
{
    let (lng, lat) = point_params(dto.green_center_location.as_ref());
    let on_conflict = if skip_existing {
        "ON CONFLICT ON CONSTRAINT holes_course_number_unique DO NOTHING"
    } else {
        ""
    };

    let query = format!(
        r#"
        INSERT INTO holes (course_id, hole_number, handicap, green_center_location)
        VALUES (
            $1, $2, $3,
            CASE WHEN $4::float8 IS NULL THEN NULL ELSE ST_SetSRID(ST_MakePoint($4, $5), 4326) END
        )
        {}
        RETURNING {}
        "#,
        on_conflict, HOLE_COLUMNS
    );

    sqlx::query_as::<_, Hole>(&query)
        .bind(dto.course_id)
        .bind(dto.hole_number)
        .bind(dto.handicap)
        .bind(lng)
        .bind(lat)
        .fetch_optional(executor)
        .await
        .map_err(map_db_error)
}

pub struct HoleService {
    pool: PgPool,
}

impl HoleService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<HoleResponseDto>> {
        let query = format!(
            "SELECT {} FROM holes ORDER BY course_id, hole_number",
            HOLE_COLUMNS
        );

        let holes = sqlx::query_as::<_, Hole>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list holes: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(holes.into_iter().map(HoleResponseDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<HoleResponseDto> {
        let query = format!("SELECT {} FROM holes WHERE hole_id = $1", HOLE_COLUMNS);

        sqlx::query_as::<_, Hole>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get hole {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .map(HoleResponseDto::from)
            .ok_or_else(|| AppError::NotFound("Hole not found".to_string()))
    }

    pub async fn get_by_course_and_number(
        &self,
        course_id: i64,
        hole_number: i32,
    ) -> Result<HoleResponseDto> {
        let query = format!(
            "SELECT {} FROM holes WHERE course_id = $1 AND hole_number = $2",
            HOLE_COLUMNS
        );

        sqlx::query_as::<_, Hole>(&query)
            .bind(course_id)
            .bind(hole_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to get hole {} of course {}: {:?}",
                    hole_number,
                    course_id,
                    e
                );
                AppError::Database(e)
            })?
            .map(HoleResponseDto::from)
            .ok_or_else(|| AppError::NotFound("Hole not found".to_string()))
    }

    pub async fn create(&self, dto: CreateHoleDto) -> Result<HoleResponseDto> {
        let hole = insert_hole(&self.pool, &dto, false)
            .await?
            .ok_or_else(|| AppError::Internal("Hole insert returned no row".to_string()))?;

        tracing::info!(
            "Hole created: id={}, course_id={}, number={}",
            hole.hole_id,
            hole.course_id,
            hole.hole_number
        );

        Ok(hole.into())
    }

    /// Create several holes in one transaction, skipping numbers a course already has
    pub async fn create_many(&self, holes: Vec<CreateHoleDto>) -> Result<CreateHolesResponseDto> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let mut created = Vec::with_capacity(holes.len());
        let mut skipped = Vec::new();

        for dto in &holes {
            match insert_hole(&mut *tx, dto, true).await? {
                Some(hole) => created.push(HoleResponseDto::from(hole)),
                None => skipped.push(SkippedHoleDto {
                    course_id: dto.course_id,
                    hole_number: dto.hole_number,
                }),
            }
        }

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Holes created: {} created, {} skipped",
            created.len(),
            skipped.len()
        );

        Ok(CreateHolesResponseDto { created, skipped })
    }

    pub async fn update(&self, id: i64, dto: UpdateHoleDto) -> Result<HoleResponseDto> {
        let (lng, lat) = point_params(dto.green_center_location.as_ref());

        let query = format!(
            r#"
            UPDATE holes
            SET course_id = COALESCE($1, course_id),
                hole_number = COALESCE($2, hole_number),
                handicap = COALESCE($3, handicap),
                green_center_location = CASE
                    WHEN $4::float8 IS NULL THEN green_center_location
                    ELSE ST_SetSRID(ST_MakePoint($4, $5), 4326)
                END
            WHERE hole_id = $6
            RETURNING {}
            "#,
            HOLE_COLUMNS
        );

        sqlx::query_as::<_, Hole>(&query)
            .bind(dto.course_id)
            .bind(dto.hole_number)
            .bind(dto.handicap)
            .bind(lng)
            .bind(lat)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(HoleResponseDto::from)
            .ok_or_else(|| AppError::NotFound("Hole not found".to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM holes WHERE hole_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Hole not found".to_string()));
        }

        tracing::info!("Hole deleted: id={}", id);
        Ok(())
    }
}
