use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Where the ball finished sideways relative to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "shot_direction", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ShotDirection {
    Left,
    Middle,
    Right,
}

/// Where the ball finished lengthwise relative to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "shot_distance", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ShotDistance {
    Short,
    Center,
    Long,
}

#[derive(Debug, Clone, FromRow)]
pub struct Shot {
    pub shot_id: i64,
    pub hole_stats_id: i64,
    pub club_id: Option<i64>,
    pub type_of_shot_id: Option<i64>,
    pub shot_number: i32,
    pub left_middle_right: Option<ShotDirection>,
    pub short_center_long: Option<ShotDistance>,
    pub in_hole: bool,
    pub start_lng: Option<f64>,
    pub start_lat: Option<f64>,
    pub end_lng: Option<f64>,
    pub end_lat: Option<f64>,
}
