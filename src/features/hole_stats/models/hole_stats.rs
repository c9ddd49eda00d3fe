use sqlx::types::Json;
use sqlx::FromRow;

use crate::features::shots::dtos::ShotDetailDto;

#[derive(Debug, Clone, FromRow)]
pub struct HoleStats {
    pub hole_stats_id: i64,
    pub scorecard_id: i64,
    pub hole_id: i64,
    pub score: i32,
    pub fairway_hit: bool,
    pub green_in_regulation: bool,
    pub putts: i32,
    pub penalty_strokes: Option<i32>,
    pub sand_save: Option<bool>,
    pub up_and_down: Option<bool>,
}

/// Hole statistics joined with the hole number, the par from the
/// scorecard's tee and the shots played
#[derive(Debug, Clone, FromRow)]
pub struct HoleStatsDetail {
    pub hole_stats_id: i64,
    pub scorecard_id: i64,
    pub hole_id: i64,
    pub hole_number: i32,
    pub par: Option<i32>,
    pub score: i32,
    pub fairway_hit: bool,
    pub green_in_regulation: bool,
    pub putts: i32,
    pub penalty_strokes: Option<i32>,
    pub sand_save: Option<bool>,
    pub up_and_down: Option<bool>,
    pub shots: Json<Vec<ShotDetailDto>>,
}
