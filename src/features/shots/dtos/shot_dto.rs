use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::shots::models::{Shot, ShotDirection, ShotDistance};
use crate::shared::geo::GeoPoint;

/// Fields of a new shot. Used on its own when a scorecard is created
/// with its shots, and inside [`CreateShotDto`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShotInputDto {
    #[validate(range(min = 1, message = "clubId must be a positive id"))]
    pub club_id: Option<i64>,

    #[validate(range(min = 1, message = "typeOfShotId must be a positive id"))]
    pub type_of_shot_id: Option<i64>,

    #[validate(range(min = 1, message = "Shot number must be at least 1"))]
    pub shot_number: i32,

    pub left_middle_right: Option<ShotDirection>,

    pub short_center_long: Option<ShotDistance>,

    #[serde(default)]
    pub in_hole: bool,

    #[validate(nested)]
    pub location_start: Option<GeoPoint>,

    #[validate(nested)]
    pub location_end: Option<GeoPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateShotDto {
    #[validate(range(min = 1, message = "holeStatsId must be a positive id"))]
    pub hole_stats_id: i64,

    #[serde(flatten)]
    #[validate(nested)]
    pub shot: ShotInputDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShotDto {
    #[validate(range(min = 1, message = "clubId must be a positive id"))]
    pub club_id: Option<i64>,

    #[validate(range(min = 1, message = "typeOfShotId must be a positive id"))]
    pub type_of_shot_id: Option<i64>,

    #[validate(range(min = 1, message = "Shot number must be at least 1"))]
    pub shot_number: Option<i32>,

    pub left_middle_right: Option<ShotDirection>,

    pub short_center_long: Option<ShotDistance>,

    pub in_hole: Option<bool>,

    #[validate(nested)]
    pub location_start: Option<GeoPoint>,

    #[validate(nested)]
    pub location_end: Option<GeoPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShotResponseDto {
    pub shot_id: i64,
    pub hole_stats_id: i64,
    pub club_id: Option<i64>,
    pub type_of_shot_id: Option<i64>,
    pub shot_number: i32,
    pub left_middle_right: Option<ShotDirection>,
    pub short_center_long: Option<ShotDistance>,
    pub in_hole: bool,
    pub location_start: Option<GeoPoint>,
    pub location_end: Option<GeoPoint>,
}

impl From<Shot> for ShotResponseDto {
    fn from(s: Shot) -> Self {
        Self {
            shot_id: s.shot_id,
            hole_stats_id: s.hole_stats_id,
            club_id: s.club_id,
            type_of_shot_id: s.type_of_shot_id,
            shot_number: s.shot_number,
            left_middle_right: s.left_middle_right,
            short_center_long: s.short_center_long,
            in_hole: s.in_hole,
            location_start: GeoPoint::from_columns(s.start_lng, s.start_lat),
            location_end: GeoPoint::from_columns(s.end_lng, s.end_lat),
        }
    }
}

/// Shot as embedded in hole statistics, with the club name resolved
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShotDetailDto {
    pub shot_id: i64,
    pub shot_number: i32,
    pub club_id: Option<i64>,
    pub club_name: Option<String>,
    pub type_of_shot_id: Option<i64>,
    pub left_middle_right: Option<ShotDirection>,
    pub short_center_long: Option<ShotDistance>,
    pub in_hole: bool,
    pub location_start: Option<GeoPoint>,
    pub location_end: Option<GeoPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_flattens_shot_fields() {
        let dto: CreateShotDto = serde_json::from_value(json!({
            "holeStatsId": 8,
            "clubId": 3,
            "shotNumber": 1,
            "leftMiddleRight": "left",
            "shortCenterLong": "long"
        }))
        .unwrap();

        assert_eq!(dto.hole_stats_id, 8);
        assert_eq!(dto.shot.left_middle_right, Some(ShotDirection::Left));
        assert_eq!(dto.shot.short_center_long, Some(ShotDistance::Long));
        assert!(!dto.shot.in_hole);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_unknown_direction_is_rejected() {
        let result = serde_json::from_value::<ShotInputDto>(json!({
            "shotNumber": 1,
            "leftMiddleRight": "straight"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_shot_number_starts_at_one() {
        let dto: ShotInputDto = serde_json::from_value(json!({ "shotNumber": 0 })).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_detail_decodes_from_jsonb() {
        let shot: ShotDetailDto = serde_json::from_value(json!({
            "shotId": 1,
            "shotNumber": 2,
            "clubId": null,
            "clubName": null,
            "typeOfShotId": null,
            "leftMiddleRight": "middle",
            "shortCenterLong": null,
            "inHole": true,
            "locationStart": null,
            "locationEnd": { "type": "Point", "coordinates": [5.0, 52.0] }
        }))
        .unwrap();

        assert_eq!(shot.left_middle_right, Some(ShotDirection::Middle));
        assert!(shot.location_end.is_some());
    }
}
