use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::clubs::models::Club;
use crate::shared::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClubDto {
    #[validate(
        length(max = 100, message = "Club name must be at most 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub club_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClubDto {
    #[validate(
        length(max = 100, message = "Club name must be at most 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub club_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClubResponseDto {
    pub club_id: i64,
    pub club_name: String,
}

impl From<Club> for ClubResponseDto {
    fn from(c: Club) -> Self {
        Self {
            club_id: c.club_id,
            club_name: c.club_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_club_name_is_rejected() {
        let dto = CreateClubDto {
            club_name: "   ".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_without_name_is_valid() {
        let dto = UpdateClubDto { club_name: None };
        assert!(dto.validate().is_ok());
    }
}
