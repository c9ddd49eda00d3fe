use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::tees::models::{Tee, TeeDetail};
use crate::shared::constants::{MAX_SLOPE_RATING, MIN_SLOPE_RATING};
use crate::shared::geo::GeoPoint;
use crate::shared::validation::{validate_course_rating, validate_not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeeDto {
    #[validate(
        length(max = 50, message = "Tee name must be at most 50 characters"),
        custom(function = "validate_not_blank")
    )]
    pub tee_name: String,

    #[validate(range(min = 1, message = "courseId must be a positive id"))]
    pub course_id: i64,

    #[validate(range(
        min = MIN_SLOPE_RATING,
        max = MAX_SLOPE_RATING,
        message = "Slope rating must be between 55 and 155"
    ))]
    pub slope_rating: i32,

    #[validate(custom(function = "validate_course_rating"))]
    #[schema(value_type = f64, example = 72.1)]
    pub course_rating: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeeDto {
    #[validate(
        length(max = 50, message = "Tee name must be at most 50 characters"),
        custom(function = "validate_not_blank")
    )]
    pub tee_name: Option<String>,

    #[validate(range(min = 1, message = "courseId must be a positive id"))]
    pub course_id: Option<i64>,

    #[validate(range(
        min = MIN_SLOPE_RATING,
        max = MAX_SLOPE_RATING,
        message = "Slope rating must be between 55 and 155"
    ))]
    pub slope_rating: Option<i32>,

    #[validate(custom(function = "validate_course_rating"))]
    #[schema(value_type = Option<f64>)]
    pub course_rating: Option<Decimal>,
}

/// Tee as embedded in establishments and courses.
/// `length` is only present where the course listing totals it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeeSummaryDto {
    pub tee_id: i64,
    pub tee_name: String,
    pub slope_rating: i32,
    #[schema(value_type = f64)]
    pub course_rating: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeeHoleLengthDto {
    pub hole_id: i64,
    pub hole_number: i32,
    pub length: i32,
    pub par: i32,
    pub tee_box_location: Option<GeoPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeeDto {
    pub tee_id: i64,
    pub course_id: i64,
    pub tee_name: String,
    pub slope_rating: i32,
    #[schema(value_type = f64)]
    pub course_rating: Decimal,
}

impl From<Tee> for TeeDto {
    fn from(t: Tee) -> Self {
        Self {
            tee_id: t.tee_id,
            course_id: t.course_id,
            tee_name: t.tee_name,
            slope_rating: t.slope_rating,
            course_rating: t.course_rating,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeeResponseDto {
    pub tee_id: i64,
    pub course_id: i64,
    pub tee_name: String,
    pub slope_rating: i32,
    #[schema(value_type = f64)]
    pub course_rating: Decimal,
    /// Sum of the hole lengths for this tee
    pub course_length: i64,
    /// Sum of the hole pars for this tee
    pub par: i64,
    pub hole_lengths: Vec<TeeHoleLengthDto>,
}

impl From<TeeDetail> for TeeResponseDto {
    fn from(t: TeeDetail) -> Self {
        Self {
            tee_id: t.tee_id,
            course_id: t.course_id,
            tee_name: t.tee_name,
            slope_rating: t.slope_rating,
            course_rating: t.course_rating,
            course_length: t.course_length,
            par: t.par,
            hole_lengths: t.hole_lengths.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create(slope: i32, rating: f64) -> CreateTeeDto {
        serde_json::from_value(json!({
            "teeName": "Yellow",
            "courseId": 1,
            "slopeRating": slope,
            "courseRating": rating
        }))
        .unwrap()
    }

    #[test]
    fn test_slope_rating_bounds() {
        assert!(create(55, 70.0).validate().is_ok());
        assert!(create(155, 70.0).validate().is_ok());
        assert!(create(54, 70.0).validate().is_err());
        assert!(create(156, 70.0).validate().is_err());
    }

    #[test]
    fn test_course_rating_bounds() {
        assert!(create(120, 0.0).validate().is_err());
        assert!(create(120, 100.0).validate().is_err());
        assert!(create(120, 71.3).validate().is_ok());
    }

    #[test]
    fn test_summary_omits_missing_length() {
        let summary = TeeSummaryDto {
            tee_id: 1,
            tee_name: "Red".into(),
            slope_rating: 118,
            course_rating: Decimal::new(695, 1),
            length: None,
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("length").is_none());
        assert_eq!(value["courseRating"], json!(69.5));
    }

    #[test]
    fn test_hole_lengths_decode_with_optional_tee_box() {
        let holes: Vec<TeeHoleLengthDto> = serde_json::from_value(json!([
            { "holeId": 1, "holeNumber": 1, "length": 350, "par": 4, "teeBoxLocation": null },
            {
                "holeId": 2, "holeNumber": 2, "length": 160, "par": 3,
                "teeBoxLocation": { "type": "Point", "coordinates": [5.1, 52.0] }
            }
        ]))
        .unwrap();
        assert!(holes[0].tee_box_location.is_none());
        assert_eq!(holes[1].tee_box_location.as_ref().map(|p| p.lat()), Some(52.0));
    }
}
