use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Club {
    pub club_id: i64,
    pub club_name: String,
}
