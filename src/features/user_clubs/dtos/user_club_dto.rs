use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::user_clubs::models::UserClub;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserClubDto {
    /// Defaults to the caller
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: Option<i64>,

    #[validate(range(min = 1, message = "clubId must be a positive id"))]
    pub club_id: i64,

    pub in_bag: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserClubDto {
    pub in_bag: Option<bool>,
    #[validate(range(min = 0))]
    pub full_shots: Option<i32>,
    #[validate(range(min = 0))]
    pub average_distance: Option<i32>,
    #[validate(range(min = 0))]
    pub left_shots: Option<i32>,
    #[validate(range(min = 0))]
    pub middle_shots: Option<i32>,
    #[validate(range(min = 0))]
    pub right_shots: Option<i32>,
    #[validate(range(min = 0))]
    pub short_shots: Option<i32>,
    #[validate(range(min = 0))]
    pub center_shots: Option<i32>,
    #[validate(range(min = 0))]
    pub long_shots: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserClubResponseDto {
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

impl From<UserClub> for UserClubResponseDto {
    fn from(uc: UserClub) -> Self {
        Self {
            user_club_id: uc.user_club_id,
            user_id: uc.user_id,
            club_id: uc.club_id,
            club_name: uc.club_name,
            in_bag: uc.in_bag,
            full_shots: uc.full_shots,
            average_distance: uc.average_distance,
            left_shots: uc.left_shots,
            middle_shots: uc.middle_shots,
            right_shots: uc.right_shots,
            short_shots: uc.short_shots,
            center_shots: uc.center_shots,
            long_shots: uc.long_shots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_must_not_be_negative() {
        let dto = UpdateUserClubDto {
            left_shots: Some(-1),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = UpdateUserClubDto {
            in_bag: Some(false),
            full_shots: Some(0),
            average_distance: Some(210),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }
}
