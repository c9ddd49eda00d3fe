use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "round_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoundType {
    #[default]
    Practice,
    Competition,
}

/// Scorecard joined with its tee, course and the tee's hole totals
#[derive(Debug, Clone, FromRow)]
pub struct ScorecardRow {
    pub scorecard_id: i64,
    pub user_id: i64,
    pub tee_id: i64,
    pub scorecard_date: DateTime<Utc>,
    pub type_of_round: RoundType,
    pub created_at: DateTime<Utc>,
    pub course_id: i64,
    pub course_name: String,
    pub tee_name: String,
    pub slope_rating: i32,
    pub course_rating: Decimal,
    pub tee_length: i64,
    pub par: i64,
}
