use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::AppError;

/// Account role, stored as the `user_role` Postgres enum
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

/// The caller behind a validated access token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Admins manage everything; everyone else only what they own
    pub fn can_manage(&self, owner_id: i64) -> bool {
        self.is_admin() || self.user_id == owner_id
    }

    pub fn ensure_can_manage(&self, owner_id: i64) -> Result<(), AppError> {
        if self.can_manage(owner_id) {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "You do not have permission to modify this resource".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(user_id: i64, role: UserRole) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id,
            username: "player".to_string(),
            role,
        }
    }

    #[test]
    fn test_owner_can_manage_own_records() {
        let player = user(7, UserRole::User);
        assert!(player.can_manage(7));
        assert!(!player.can_manage(8));
        assert!(player.ensure_can_manage(8).is_err());
    }

    #[test]
    fn test_admin_can_manage_everything() {
        let admin = user(1, UserRole::Admin);
        assert!(admin.is_admin());
        assert!(admin.can_manage(42));
        assert!(admin.ensure_can_manage(42).is_ok());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(UserRole::Admin).unwrap(),
            serde_json::json!("admin")
        );
        assert_eq!(UserRole::default(), UserRole::User);
    }
}
