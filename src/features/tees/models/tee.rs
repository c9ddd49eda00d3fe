use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::FromRow;

use crate::features::tees::dtos::TeeHoleLengthDto;

#[derive(Debug, Clone, FromRow)]
pub struct Tee {
    pub tee_id: i64,
    pub course_id: i64,
    pub tee_name: String,
    pub slope_rating: i32,
    pub course_rating: Decimal,
}

/// Tee with its hole lengths and the totals derived from them
#[derive(Debug, Clone, FromRow)]
pub struct TeeDetail {
    pub tee_id: i64,
    pub course_id: i64,
    pub tee_name: String,
    pub slope_rating: i32,
    pub course_rating: Decimal,
    pub course_length: i64,
    pub par: i64,
    pub hole_lengths: Json<Vec<TeeHoleLengthDto>>,
}
