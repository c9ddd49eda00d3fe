use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::holes::models::Hole;
use crate::shared::geo::GeoPoint;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHoleDto {
    #[validate(range(min = 1, message = "courseId must be a positive id"))]
    pub course_id: i64,

    #[validate(range(min = 1, max = 36, message = "Hole number must be between 1 and 36"))]
    pub hole_number: i32,

    #[validate(range(min = 1, max = 36, message = "Handicap must be between 1 and 36"))]
    pub handicap: i32,

    #[validate(nested)]
    pub green_center_location: Option<GeoPoint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHoleDto {
    #[validate(range(min = 1, message = "courseId must be a positive id"))]
    pub course_id: Option<i64>,

    #[validate(range(min = 1, max = 36, message = "Hole number must be between 1 and 36"))]
    pub hole_number: Option<i32>,

    #[validate(range(min = 1, max = 36, message = "Handicap must be between 1 and 36"))]
    pub handicap: Option<i32>,

    #[validate(nested)]
    pub green_center_location: Option<GeoPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateHolesDto {
    #[validate(
        length(min = 1, message = "At least one hole is required"),
        nested
    )]
    pub holes: Vec<CreateHoleDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkippedHoleDto {
    pub course_id: i64,
    pub hole_number: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateHolesResponseDto {
    pub created: Vec<HoleResponseDto>,
    /// Holes whose number already existed on their course
    pub skipped: Vec<SkippedHoleDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoleResponseDto {
    pub hole_id: i64,
    pub course_id: i64,
    pub hole_number: i32,
    pub handicap: i32,
    pub green_center_location: Option<GeoPoint>,
}

impl From<Hole> for HoleResponseDto {
    fn from(h: Hole) -> Self {
        Self {
            hole_id: h.hole_id,
            course_id: h.course_id,
            hole_number: h.hole_number,
            handicap: h.handicap,
            green_center_location: GeoPoint::from_columns(h.green_center_lng, h.green_center_lat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hole_number_bounds() {
        let dto: CreateHoleDto = serde_json::from_value(json!({
            "courseId": 1, "holeNumber": 37, "handicap": 5
        }))
        .unwrap();
        assert!(dto.validate().is_err());

        let dto: CreateHoleDto = serde_json::from_value(json!({
            "courseId": 1, "holeNumber": 36, "handicap": 36
        }))
        .unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_multi_validates_each_hole() {
        let dto: CreateHolesDto = serde_json::from_value(json!({
            "holes": [
                { "courseId": 1, "holeNumber": 1, "handicap": 7 },
                { "courseId": 1, "holeNumber": 2, "handicap": 0 }
            ]
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_missing_green_center_serializes_as_null() {
        let hole = HoleResponseDto::from(Hole {
            hole_id: 1,
            course_id: 1,
            hole_number: 1,
            handicap: 9,
            green_center_lng: None,
            green_center_lat: None,
        });
        let value = serde_json::to_value(&hole).unwrap();
        assert!(value["greenCenterLocation"].is_null());
    }
}
