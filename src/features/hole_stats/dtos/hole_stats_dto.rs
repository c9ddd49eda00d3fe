use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::hole_stats::models::{HoleStats, HoleStatsDetail};
use crate::features::shots::dtos::{ShotDetailDto, ShotInputDto};

/// Recorded values of one hole
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoleStatsInputDto {
    #[validate(range(min = 1, message = "holeId must be a positive id"))]
    pub hole_id: i64,

    #[validate(range(min = 1, max = 20, message = "Score must be between 1 and 20"))]
    pub score: i32,

    #[validate(range(min = 0, max = 10, message = "Putts must be between 0 and 10"))]
    pub putts: i32,

    #[serde(default)]
    pub fairway_hit: bool,

    #[serde(default)]
    pub green_in_regulation: bool,

    #[validate(range(min = 0, message = "Penalty strokes must not be negative"))]
    pub penalty_strokes: Option<i32>,

    pub sand_save: Option<bool>,

    pub up_and_down: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHoleStatsDto {
    #[validate(range(min = 1, message = "scorecardId must be a positive id"))]
    pub scorecard_id: i64,

    #[serde(flatten)]
    #[validate(nested)]
    pub stats: HoleStatsInputDto,
}

/// A hole submitted together with a new scorecard, optionally with its shots
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardHoleDto {
    #[serde(flatten)]
    #[validate(nested)]
    pub stats: HoleStatsInputDto,

    #[validate(nested)]
    pub shots: Option<Vec<ShotInputDto>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHoleStatsDto {
    #[validate(range(min = 1, message = "holeId must be a positive id"))]
    pub hole_id: Option<i64>,

    #[validate(range(min = 1, max = 20, message = "Score must be between 1 and 20"))]
    pub score: Option<i32>,

    #[validate(range(min = 0, max = 10, message = "Putts must be between 0 and 10"))]
    pub putts: Option<i32>,

    pub fairway_hit: Option<bool>,

    pub green_in_regulation: Option<bool>,

    #[validate(range(min = 0, message = "Penalty strokes must not be negative"))]
    pub penalty_strokes: Option<i32>,

    pub sand_save: Option<bool>,

    pub up_and_down: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct HoleStatsQuery {
    /// Scorecard whose hole statistics are listed
    pub scorecard_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoleStatsResponseDto {
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

impl From<HoleStats> for HoleStatsResponseDto {
    fn from(h: HoleStats) -> Self {
        Self {
            hole_stats_id: h.hole_stats_id,
            scorecard_id: h.scorecard_id,
            hole_id: h.hole_id,
            score: h.score,
            fairway_hit: h.fairway_hit,
            green_in_regulation: h.green_in_regulation,
            putts: h.putts,
            penalty_strokes: h.penalty_strokes,
            sand_save: h.sand_save,
            up_and_down: h.up_and_down,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoleStatsDetailDto {
    pub hole_stats_id: i64,
    pub scorecard_id: i64,
    pub hole_id: i64,
    pub hole_number: i32,
    /// Par of the hole from the scorecard's tee, if recorded
    pub par: Option<i32>,
    pub score: i32,
    pub fairway_hit: bool,
    pub green_in_regulation: bool,
    pub putts: i32,
    pub penalty_strokes: Option<i32>,
    pub sand_save: Option<bool>,
    pub up_and_down: Option<bool>,
    pub shots: Vec<ShotDetailDto>,
}

impl From<HoleStatsDetail> for HoleStatsDetailDto {
    fn from(h: HoleStatsDetail) -> Self {
        Self {
            hole_stats_id: h.hole_stats_id,
            scorecard_id: h.scorecard_id,
            hole_id: h.hole_id,
            hole_number: h.hole_number,
            par: h.par,
            score: h.score,
            fairway_hit: h.fairway_hit,
            green_in_regulation: h.green_in_regulation,
            putts: h.putts,
            penalty_strokes: h.penalty_strokes,
            sand_save: h.sand_save,
            up_and_down: h.up_and_down,
            shots: h.shots.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_and_putt_bounds() {
        let dto: HoleStatsInputDto =
            serde_json::from_value(json!({ "holeId": 1, "score": 21, "putts": 2 })).unwrap();
        assert!(dto.validate().is_err());

        let dto: HoleStatsInputDto =
            serde_json::from_value(json!({ "holeId": 1, "score": 4, "putts": 11 })).unwrap();
        assert!(dto.validate().is_err());

        let dto: HoleStatsInputDto =
            serde_json::from_value(json!({ "holeId": 1, "score": 4, "putts": 0 })).unwrap();
        assert!(dto.validate().is_ok());
        assert!(!dto.fairway_hit);
    }

    #[test]
    fn test_scorecard_hole_validates_nested_shots() {
        let dto: ScorecardHoleDto = serde_json::from_value(json!({
            "holeId": 1,
            "score": 4,
            "putts": 2,
            "shots": [{ "shotNumber": 0 }]
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }
}
