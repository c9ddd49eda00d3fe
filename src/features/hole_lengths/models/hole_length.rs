use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct HoleLength {
    pub hole_length_id: i64,
    pub hole_id: i64,
    pub tee_id: i64,
    pub length: i32,
    pub par: i32,
    pub tee_box_lng: Option<f64>,
    pub tee_box_lat: Option<f64>,
}
