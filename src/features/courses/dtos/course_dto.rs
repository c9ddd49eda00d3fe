use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::courses::models::Course;
use crate::features::tees::dtos::TeeSummaryDto;
use crate::shared::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    #[validate(
        length(max = 255, message = "Course name must be at most 255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub course_name: String,

    #[validate(range(min = 1, message = "establishmentId must be a positive id"))]
    pub establishment_id: i64,

    /// Link to or text of the printed scorecard
    pub scorecard: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseDto {
    #[validate(
        length(max = 255, message = "Course name must be at most 255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub course_name: Option<String>,

    #[validate(range(min = 1, message = "establishmentId must be a positive id"))]
    pub establishment_id: Option<i64>,

    pub scorecard: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponseDto {
    pub course_id: i64,
    pub course_name: String,
    pub establishment_id: i64,
    pub scorecard: Option<String>,
    pub tees: Vec<TeeSummaryDto>,
}

impl From<Course> for CourseResponseDto {
    fn from(c: Course) -> Self {
        Self {
            course_id: c.course_id,
            course_name: c.course_name,
            establishment_id: c.establishment_id,
            scorecard: c.scorecard,
            tees: c.tees.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scorecard_is_optional() {
        let dto: CreateCourseDto = serde_json::from_value(json!({
            "courseName": "Blue Nine",
            "establishmentId": 2
        }))
        .unwrap();
        assert!(dto.scorecard.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_blank_course_name_is_rejected() {
        let dto: CreateCourseDto = serde_json::from_value(json!({
            "courseName": "   ",
            "establishmentId": 2
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_embedded_tees_keep_length() {
        let tees: Vec<TeeSummaryDto> = serde_json::from_value(json!([
            { "teeId": 3, "teeName": "Blue", "slopeRating": 127, "courseRating": 71.8, "length": 5960 }
        ]))
        .unwrap();
        assert_eq!(tees[0].length, Some(5960));
    }
}
