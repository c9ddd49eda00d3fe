//! GeoJSON point handling.
//!
//! Locations travel over the wire as `{"type": "Point", "coordinates": [lng, lat]}`
//! and are stored as PostGIS `geometry(Point, 4326)` columns. Rows read the
//! point back through `ST_X`/`ST_Y` as two nullable floats.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PointKind {
    Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: PointKind,

    /// `[longitude, latitude]`
    #[validate(custom(function = "validate_coordinates"))]
    #[schema(value_type = Vec<f64>, example = json!([106.8272, -6.1754]))]
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self {
            kind: PointKind::Point,
            coordinates: [lng, lat],
        }
    }

    /// Rebuild a point from the `ST_X`/`ST_Y` pair of a row.
    /// Either coordinate missing means the column was NULL.
    pub fn from_columns(lng: Option<f64>, lat: Option<f64>) -> Option<Self> {
        match (lng, lat) {
            (Some(lng), Some(lat)) => Some(Self::new(lng, lat)),
            _ => None,
        }
    }

    pub fn lng(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn lat(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Split an optional point into bindable `(lng, lat)` parameters
pub fn point_params(point: Option<&GeoPoint>) -> (Option<f64>, Option<f64>) {
    match point {
        Some(p) => (Some(p.lng()), Some(p.lat())),
        None => (None, None),
    }
}

pub fn validate_coordinates(coordinates: &[f64; 2]) -> Result<(), ValidationError> {
    let [lng, lat] = *coordinates;
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        return Err(ValidationError::new("longitude")
            .with_message("Longitude must be between -180 and 180".into()));
    }
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(ValidationError::new("latitude")
            .with_message("Latitude must be between -90 and 90".into()));
    }
    Ok(())
}

/// SQL fragment building a jsonb GeoJSON point (or NULL) from a geometry column
pub fn jsonb_point_sql(column: &str) -> String {
    format!(
        "CASE WHEN {col} IS NULL THEN NULL ELSE jsonb_build_object('type', 'Point', 'coordinates', jsonb_build_array(ST_X({col}), ST_Y({col}))) END",
        col = column
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_geojson_point() {
        let point: GeoPoint =
            serde_json::from_value(json!({ "type": "Point", "coordinates": [4.89, 52.37] }))
                .unwrap();
        assert_eq!(point.lng(), 4.89);
        assert_eq!(point.lat(), 52.37);
        assert!(point.validate().is_ok());
    }

    #[test]
    fn test_rejects_other_geometry_types() {
        let result = serde_json::from_value::<GeoPoint>(
            json!({ "type": "LineString", "coordinates": [4.89, 52.37] }),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_wrong_coordinate_count() {
        let result =
            serde_json::from_value::<GeoPoint>(json!({ "type": "Point", "coordinates": [4.89] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_coordinate_ranges() {
        assert!(GeoPoint::new(181.0, 0.0).validate().is_err());
        assert!(GeoPoint::new(0.0, -91.0).validate().is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).validate().is_err());
        assert!(GeoPoint::new(-180.0, 90.0).validate().is_ok());
    }

    #[test]
    fn test_from_columns_needs_both_values() {
        assert_eq!(
            GeoPoint::from_columns(Some(1.0), Some(2.0)),
            Some(GeoPoint::new(1.0, 2.0))
        );
        assert_eq!(GeoPoint::from_columns(Some(1.0), None), None);
        assert_eq!(GeoPoint::from_columns(None, None), None);
    }

    #[test]
    fn test_serializes_as_geojson() {
        let json = serde_json::to_value(GeoPoint::new(1.5, 2.5)).unwrap();
        assert_eq!(json, json!({ "type": "Point", "coordinates": [1.5, 2.5] }));
    }

    #[test]
    fn test_point_params() {
        let point = GeoPoint::new(3.0, 4.0);
        assert_eq!(point_params(Some(&point)), (Some(3.0), Some(4.0)));
        assert_eq!(point_params(None), (None, None));
    }
}
