use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Hole {
    pub hole_id: i64,
    pub course_id: i64,
    pub hole_number: i32,
    pub handicap: i32,
    pub green_center_lng: Option<f64>,
    pub green_center_lat: Option<f64>,
}
