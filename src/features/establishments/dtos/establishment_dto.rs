use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::establishments::models::Establishment;
use crate::features::tees::dtos::TeeSummaryDto;
use crate::shared::geo::GeoPoint;
use crate::shared::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEstablishmentDto {
    #[validate(
        length(max = 255, message = "Establishment name must be at most 255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub establishment_name: String,

    #[validate(
        length(max = 20, message = "Abbreviation must be at most 20 characters"),
        custom(function = "validate_not_blank")
    )]
    pub abbreviation: String,

    #[validate(range(min = 0, message = "Establishment number must not be negative"))]
    pub establishment_number: i32,

    #[validate(nested)]
    pub location: GeoPoint,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEstablishmentDto {
    #[validate(
        length(max = 255, message = "Establishment name must be at most 255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub establishment_name: Option<String>,

    #[validate(
        length(max = 20, message = "Abbreviation must be at most 20 characters"),
        custom(function = "validate_not_blank")
    )]
    pub abbreviation: Option<String>,

    #[validate(range(min = 0, message = "Establishment number must not be negative"))]
    pub establishment_number: Option<i32>,

    #[validate(nested)]
    pub location: Option<GeoPoint>,
}

/// Radius filter for the nearby search, in metres
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NearbyQuery {
    /// Search radius in metres (default 1000, max 50000)
    pub radius: Option<f64>,
}

/// Course as embedded in an establishment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstablishmentCourseDto {
    pub course_id: i64,
    pub course_name: String,
    pub scorecard: Option<String>,
    pub tees: Vec<TeeSummaryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstablishmentResponseDto {
    pub establishment_id: i64,
    pub establishment_name: String,
    pub abbreviation: String,
    pub establishment_number: i32,
    pub location: GeoPoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    pub courses: Vec<EstablishmentCourseDto>,
}

impl From<Establishment> for EstablishmentResponseDto {
    fn from(e: Establishment) -> Self {
        Self {
            establishment_id: e.establishment_id,
            establishment_name: e.establishment_name,
            abbreviation: e.abbreviation,
            establishment_number: e.establishment_number,
            location: GeoPoint::new(e.location_lng, e.location_lat),
            distance_meters: e.distance_meters,
            courses: e.courses.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_validates_location() {
        let dto: CreateEstablishmentDto = serde_json::from_value(json!({
            "establishmentName": "Royal Haarlem",
            "abbreviation": "RHG",
            "establishmentNumber": 12,
            "location": { "type": "Point", "coordinates": [200.0, 52.3] }
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_embedded_courses_decode_from_jsonb() {
        let courses: Vec<EstablishmentCourseDto> = serde_json::from_value(json!([
            {
                "courseId": 1,
                "courseName": "Championship",
                "scorecard": null,
                "tees": [
                    { "teeId": 4, "teeName": "White", "slopeRating": 131, "courseRating": 72.4 }
                ]
            }
        ]))
        .unwrap();

        assert_eq!(courses[0].tees.len(), 1);
        assert_eq!(courses[0].tees[0].length, None);
    }
}
