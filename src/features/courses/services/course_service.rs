use sqlx::PgPool;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::courses::dtos::{CourseResponseDto, CreateCourseDto, UpdateCourseDto};
use crate::features::courses::models::Course;
use crate::shared::validation::trim_opt;

/// Course columns plus its tees, each with the summed hole lengths
const COURSE_COLUMNS: &str = r#"
    c.course_id, c.course_name, c.establishment_id, c.scorecard,
    COALESCE((
        SELECT jsonb_agg(jsonb_build_object(
            'teeId', t.tee_id,
            'teeName', t.tee_name,
            'slopeRating', t.slope_rating,
            'courseRating', t.course_rating,
            'length', (SELECT COALESCE(SUM(hl.length), 0) FROM hole_lengths hl WHERE hl.tee_id = t.tee_id)
        ) ORDER BY t.tee_id)
        FROM tees t
        WHERE t.course_id = c.course_id
    ), '[]'::jsonb) AS tees
"#;

pub struct CourseService {
    pool: PgPool,
}

impl CourseService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<CourseResponseDto>> {
        let query = format!(
            "SELECT {} FROM courses c ORDER BY c.course_id",
            COURSE_COLUMNS
        );

        let courses = sqlx::query_as::<_, Course>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list courses: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(courses.into_iter().map(CourseResponseDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<CourseResponseDto> {
        let query = format!(
            "SELECT {} FROM courses c WHERE c.course_id = $1",
            COURSE_COLUMNS
        );

        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get course {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .map(CourseResponseDto::from)
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }

    pub async fn create(&self, dto: CreateCourseDto) -> Result<CourseResponseDto> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO courses (course_name, establishment_id, scorecard)
            VALUES ($1, $2, $3)
            RETURNING course_id
            "#,
        )
        .bind(dto.course_name.trim())
        .bind(dto.establishment_id)
        .bind(trim_opt(dto.scorecard))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        tracing::info!(
            "Course created: id={}, establishment_id={}",
            id,
            dto.establishment_id
        );

        self.get_by_id(id).await
    }

    pub async fn update(&self, id: i64, dto: UpdateCourseDto) -> Result<CourseResponseDto> {
        let updated: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE courses
            SET course_name = COALESCE($1, course_name),
                establishment_id = COALESCE($2, establishment_id),
                scorecard = COALESCE($3, scorecard)
            WHERE course_id = $4
            RETURNING course_id
            "#,
        )
        .bind(trim_opt(dto.course_name))
        .bind(dto.establishment_id)
        .bind(trim_opt(dto.scorecard))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match updated {
            Some(id) => self.get_by_id(id).await,
            None => Err(AppError::NotFound("Course not found".to_string())),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM courses WHERE course_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        tracing::info!("Course deleted: id={}", id);
        Ok(())
    }
}
