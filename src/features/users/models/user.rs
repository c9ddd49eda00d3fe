use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::features::auth::model::UserRole;

/// Database model for a user account
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: i64,
    pub user_name: String,
    pub email: String,
    /// Argon2 PHC string, never serialized
    pub password: String,
    pub role: UserRole,
    pub hcp: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
