use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::hole_stats::dtos::{HoleStatsDetailDto, ScorecardHoleDto};
use crate::features::scorecards::models::{RoundType, ScorecardRow};
use crate::features::scorecards::services::compute_stats;
use crate::shared::constants::DEFAULT_PAGE_SIZE;
use crate::shared::dates::{deserialize_iso_datetime, deserialize_opt_iso_datetime};
use crate::shared::types::PaginationQuery;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScorecardDto {
    #[validate(range(min = 1, message = "teeId must be a positive id"))]
    pub tee_id: i64,

    /// RFC 3339 timestamp or a bare `YYYY-MM-DD` date
    #[serde(deserialize_with = "deserialize_iso_datetime")]
    pub scorecard_date: DateTime<Utc>,

    #[serde(default)]
    pub type_of_round: RoundType,

    #[validate(nested)]
    pub hole_stats: Option<Vec<ScorecardHoleDto>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScorecardDto {
    #[validate(range(min = 1, message = "teeId must be a positive id"))]
    pub tee_id: Option<i64>,

    #[serde(default, deserialize_with = "deserialize_opt_iso_datetime")]
    pub scorecard_date: Option<DateTime<Utc>>,

    pub type_of_round: Option<RoundType>,
}

/// Filters and paging for the scorecard listing
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ScorecardListQuery {
    /// Only scorecards of this user
    pub user_id: Option<i64>,

    /// Page number (1-indexed, default: 1)
    pub page: Option<i64>,

    /// Number of items per page (default: 10, max: 100)
    pub page_size: Option<i64>,
}

impl ScorecardListQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardTeeDto {
    pub tee_id: i64,
    pub course_id: i64,
    pub course_name: String,
    pub tee_name: String,
    pub slope_rating: i32,
    #[schema(value_type = f64)]
    pub course_rating: Decimal,
    /// Sum of the tee's hole lengths
    pub length: i64,
}

/// Counters over all holes of a round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardStatsDto {
    pub putts: i64,
    pub fairway_hit: i64,
    pub green_in_regulation: i64,
    pub penalty_strokes: i64,
    pub sand_save: i64,
    pub up_and_down: i64,
    pub left_tee_shots: i64,
    pub middle_tee_shots: i64,
    pub right_tee_shots: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardResponseDto {
    pub scorecard_id: i64,
    pub user_id: i64,
    pub tee_id: i64,
    pub scorecard_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub type_of_round: RoundType,
    /// Total par of the tee
    pub par: i64,
    pub total_score: i64,
    pub tee: ScorecardTeeDto,
    pub stats: ScorecardStatsDto,
    pub hole_stats: Vec<HoleStatsDetailDto>,
}

impl ScorecardResponseDto {
    pub fn new(row: ScorecardRow, hole_stats: Vec<HoleStatsDetailDto>) -> Self {
        let stats = compute_stats(&hole_stats);
        let total_score = hole_stats.iter().map(|h| i64::from(h.score)).sum();

        Self {
            scorecard_id: row.scorecard_id,
            user_id: row.user_id,
            tee_id: row.tee_id,
            scorecard_date: row.scorecard_date,
            created_at: row.created_at,
            type_of_round: row.type_of_round,
            par: row.par,
            total_score,
            tee: ScorecardTeeDto {
                tee_id: row.tee_id,
                course_id: row.course_id,
                course_name: row.course_name,
                tee_name: row.tee_name,
                slope_rating: row.slope_rating,
                course_rating: row.course_rating,
                length: row.tee_length,
            },
            stats,
            hole_stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_type_defaults_to_practice() {
        let dto: CreateScorecardDto = serde_json::from_value(json!({
            "teeId": 3,
            "scorecardDate": "2024-05-01T09:30:00Z"
        }))
        .unwrap();
        assert_eq!(dto.type_of_round, RoundType::Practice);
        assert!(dto.hole_stats.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_scorecard_date_accepts_date_only_and_timestamp() {
        let dto: CreateScorecardDto =
            serde_json::from_value(json!({ "teeId": 1, "scorecardDate": "2023-05-01" })).unwrap();
        assert_eq!(dto.scorecard_date.to_rfc3339(), "2023-05-01T00:00:00+00:00");

        let dto: CreateScorecardDto = serde_json::from_value(json!({
            "teeId": 1,
            "scorecardDate": "2023-05-01T08:15:00Z"
        }))
        .unwrap();
        assert_eq!(dto.scorecard_date.to_rfc3339(), "2023-05-01T08:15:00+00:00");

        let result = serde_json::from_value::<CreateScorecardDto>(
            json!({ "teeId": 1, "scorecardDate": "May 1st" }),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_update_scorecard_date_is_optional() {
        let dto: UpdateScorecardDto =
            serde_json::from_value(json!({ "scorecardDate": "2023-05-01" })).unwrap();
        assert_eq!(
            dto.scorecard_date.map(|d| d.to_rfc3339()),
            Some("2023-05-01T00:00:00+00:00".to_string())
        );

        let dto: UpdateScorecardDto = serde_json::from_value(json!({ "teeId": 2 })).unwrap();
        assert!(dto.scorecard_date.is_none());
    }

    #[test]
    fn test_unknown_round_type_is_rejected() {
        let result = serde_json::from_value::<CreateScorecardDto>(json!({
            "teeId": 3,
            "scorecardDate": "2024-05-01T09:30:00Z",
            "typeOfRound": "casual"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_list_query_pagination_defaults() {
        let query = ScorecardListQuery::default();
        let pagination = query.pagination();
        assert_eq!(pagination.offset(), 0);
        assert_eq!(pagination.limit(), DEFAULT_PAGE_SIZE);

        let query = ScorecardListQuery {
            user_id: Some(4),
            page: Some(3),
            page_size: Some(20),
        };
        assert_eq!(query.pagination().offset(), 40);
    }
}
