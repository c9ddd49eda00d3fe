use sqlx::types::Json;
use sqlx::FromRow;

use crate::features::establishments::dtos::EstablishmentCourseDto;

/// Establishment row with its courses aggregated as jsonb
#[derive(Debug, Clone, FromRow)]
pub struct Establishment {
    pub establishment_id: i64,
    pub establishment_name: String,
    pub abbreviation: String,
    pub establishment_number: i32,
    pub location_lng: f64,
    pub location_lat: f64,
    /// Only set by the nearby search
    pub distance_meters: Option<f64>,
    pub courses: Json<Vec<EstablishmentCourseDto>>,
}
