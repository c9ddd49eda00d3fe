use sqlx::FromRow;

/// Bag entry joined with the club name
#[derive(Debug, Clone, FromRow)]
pub struct UserClub {
    pub user_club_id: i64,
    pub user_id: i64,
    pub club_id: i64,
    pub club_name: String,
    pub in_bag: bool,
    pub full_shots: i32,
    pub average_distance: i32,
    pub left_shots: i32,
    pub middle_shots: i32,
    pub right_shots: i32,
    pub short_shots: i32,
    pub center_shots: i32,
    pub long_shots: i32,
}
