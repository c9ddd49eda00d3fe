use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::auth::model::UserRole;
use crate::features::users::models::User;
use crate::shared::validation::{validate_hcp, USERNAME_REGEX};

/// Request DTO for registering a new player
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(
        length(min = 3, max = 50, message = "Username must be 3-50 characters"),
        regex(
            path = *USERNAME_REGEX,
            message = "Username must start with a letter or underscore and contain only letters, digits and underscores"
        )
    )]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// Playing handicap, defaults to 54.0
    #[validate(custom(function = "validate_hcp"))]
    #[schema(value_type = Option<f64>, example = 18.4)]
    pub hcp: Option<Decimal>,
}

/// A club to put in (or take out of) the player's bag
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BagClubDto {
    #[validate(range(min = 1, message = "clubId must be a positive id"))]
    pub club_id: i64,
    pub in_bag: Option<bool>,
}

/// Partial update of a player's profile
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(
        length(min = 3, max = 50, message = "Username must be 3-50 characters"),
        regex(
            path = *USERNAME_REGEX,
            message = "Username must start with a letter or underscore and contain only letters, digits and underscores"
        )
    )]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,

    #[validate(custom(function = "validate_hcp"))]
    #[schema(value_type = Option<f64>, example = 12.3)]
    pub hcp: Option<Decimal>,

    #[validate(nested)]
    pub clubs: Option<Vec<BagClubDto>>,

    /// Present only to reject role changes through this endpoint.
    /// `Some` whenever the key appears, even as `null`.
    #[serde(default, skip_serializing, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub role: Option<serde_json::Value>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// Response DTO for a user account (the password hash is never exposed)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    #[schema(value_type = f64)]
    pub hcp: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            user_id: u.user_id,
            username: u.user_name,
            email: u.email,
            role: u.role,
            hcp: u.hcp,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::{FreeEmail, Password};
    use fake::Fake;
    use serde_json::json;

    fn valid_create() -> CreateUserDto {
        CreateUserDto {
            username: "jordan_spieth".to_string(),
            email: FreeEmail().fake(),
            password: Password(8..20).fake(),
            hcp: None,
        }
    }

    #[test]
    fn test_create_user_valid() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_create_user_rejects_bad_username() {
        let mut dto = valid_create();
        dto.username = "9iron".to_string();
        assert!(dto.validate().is_err());

        dto.username = "ab".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_user_rejects_out_of_range_hcp() {
        let mut dto = valid_create();
        dto.hcp = Some(Decimal::new(545, 1));
        assert!(dto.validate().is_err());

        dto.hcp = Some(Decimal::new(-100, 1));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_user_rejects_short_password() {
        let mut dto = valid_create();
        dto.password = "short".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_user_reads_role_and_clubs() {
        let dto: UpdateUserDto = serde_json::from_value(json!({
            "role": "admin",
            "clubs": [{ "clubId": 3, "inBag": false }, { "clubId": 4 }]
        }))
        .unwrap();

        assert!(dto.role.is_some());
        let clubs = dto.clubs.unwrap();
        assert_eq!(clubs.len(), 2);
        assert_eq!(clubs[0].in_bag, Some(false));
        assert_eq!(clubs[1].in_bag, None);
    }

    #[test]
    fn test_update_user_flags_null_role() {
        let dto: UpdateUserDto = serde_json::from_value(json!({ "role": null })).unwrap();
        assert!(dto.role.is_some());

        let dto: UpdateUserDto = serde_json::from_value(json!({ "hcp": 10.0 })).unwrap();
        assert!(dto.role.is_none());
    }

    #[test]
    fn test_update_user_validates_nested_clubs() {
        let dto = UpdateUserDto {
            clubs: Some(vec![BagClubDto {
                club_id: 0,
                in_bag: None,
            }]),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_hcp_accepts_json_number() {
        let dto: CreateUserDto = serde_json::from_value(json!({
            "username": "rory",
            "email": "rory@example.com",
            "password": "longenough",
            "hcp": 4.2
        }))
        .unwrap();
        assert_eq!(dto.hcp, Some(Decimal::new(42, 1)));
    }

    #[test]
    fn test_user_response_hides_password() {
        let now = Utc::now();
        let dto = UserResponseDto::from(User {
            user_id: 1,
            user_name: "rory".to_string(),
            email: "rory@example.com".to_string(),
            password: "$argon2id$secret".to_string(),
            role: UserRole::User,
            hcp: Decimal::new(540, 1),
            created_at: now,
            updated_at: now,
        });
        let json = serde_json::to_value(dto).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "rory");
        assert_eq!(json["role"], "user");
    }
}
