use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::type_of_shots::models::TypeOfShot;
use crate::shared::validation::validate_not_blank;

/// Create and update share one shape: the name is the only field
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeOfShotRequestDto {
    #[validate(
        length(min = 1, max = 100, message = "Type of shot must be 1-100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub type_of_shot: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeOfShotResponseDto {
    pub type_of_shot_id: i64,
    pub type_of_shot: String,
}

impl From<TypeOfShot> for TypeOfShotResponseDto {
    fn from(t: TypeOfShot) -> Self {
        Self {
            type_of_shot_id: t.type_of_shot_id,
            type_of_shot: t.type_of_shot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_limits() {
        let ok = TypeOfShotRequestDto {
            type_of_shot: "Bunker shot".to_string(),
        };
        assert!(ok.validate().is_ok());

        let too_long = TypeOfShotRequestDto {
            type_of_shot: "a".repeat(101),
        };
        assert!(too_long.validate().is_err());

        let empty = TypeOfShotRequestDto {
            type_of_shot: String::new(),
        };
        assert!(empty.validate().is_err());
    }
}
