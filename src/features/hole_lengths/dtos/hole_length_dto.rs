use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::hole_lengths::models::HoleLength;
use crate::shared::geo::GeoPoint;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHoleLengthDto {
    #[validate(range(min = 1, message = "holeId must be a positive id"))]
    pub hole_id: i64,

    #[validate(range(min = 1, message = "teeId must be a positive id"))]
    pub tee_id: i64,

    /// Length in metres
    #[validate(range(min = 1, message = "Length must be greater than 0"))]
    pub length: i32,

    #[validate(range(min = 3, max = 6, message = "Par must be between 3 and 6"))]
    pub par: i32,

    #[validate(nested)]
    pub tee_box_location: Option<GeoPoint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHoleLengthDto {
    #[validate(range(min = 1, message = "holeId must be a positive id"))]
    pub hole_id: Option<i64>,

    #[validate(range(min = 1, message = "teeId must be a positive id"))]
    pub tee_id: Option<i64>,

    #[validate(range(min = 1, message = "Length must be greater than 0"))]
    pub length: Option<i32>,

    #[validate(range(min = 3, max = 6, message = "Par must be between 3 and 6"))]
    pub par: Option<i32>,

    #[validate(nested)]
    pub tee_box_location: Option<GeoPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoleLengthResponseDto {
    pub hole_length_id: i64,
    pub hole_id: i64,
    pub tee_id: i64,
    pub length: i32,
    pub par: i32,
    pub tee_box_location: Option<GeoPoint>,
}

impl From<HoleLength> for HoleLengthResponseDto {
    fn from(h: HoleLength) -> Self {
        Self {
            hole_length_id: h.hole_length_id,
            hole_id: h.hole_id,
            tee_id: h.tee_id,
            length: h.length,
            par: h.par,
            tee_box_location: GeoPoint::from_columns(h.tee_box_lng, h.tee_box_lat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create(length: i32, par: i32) -> CreateHoleLengthDto {
        serde_json::from_value(json!({
            "holeId": 1,
            "teeId": 2,
            "length": length,
            "par": par
        }))
        .unwrap()
    }

    #[test]
    fn test_par_bounds() {
        assert!(create(300, 3).validate().is_ok());
        assert!(create(550, 6).validate().is_ok());
        assert!(create(300, 2).validate().is_err());
        assert!(create(300, 7).validate().is_err());
    }

    #[test]
    fn test_length_must_be_positive() {
        assert!(create(0, 4).validate().is_err());
        assert!(create(-10, 4).validate().is_err());
    }
}
