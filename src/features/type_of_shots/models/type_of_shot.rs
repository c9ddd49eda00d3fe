use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct TypeOfShot {
    pub type_of_shot_id: i64,
    pub type_of_shot: String,
}
