use sqlx::types::Json;
use sqlx::FromRow;

use crate::features::tees::dtos::TeeSummaryDto;

#[derive(Debug, Clone, FromRow)]
pub struct Course {
    pub course_id: i64,
    pub course_name: String,
    pub establishment_id: i64,
    pub scorecard: Option<String>,
    pub tees: Json<Vec<TeeSummaryDto>>,
}
