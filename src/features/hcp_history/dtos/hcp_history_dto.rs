use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::hcp_history::models::HcpHistory;
use crate::shared::validation::validate_hcp;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHcpHistoryDto {
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    pub user_id: i64,

    #[validate(custom(function = "validate_hcp"))]
    #[schema(value_type = f64, example = 21.7)]
    pub hcp: Decimal,

    pub hcp_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHcpHistoryDto {
    #[validate(custom(function = "validate_hcp"))]
    #[schema(value_type = Option<f64>)]
    pub hcp: Option<Decimal>,

    pub hcp_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HcpHistoryResponseDto {
    pub hcp_history_id: i64,
    pub user_id: i64,
    #[schema(value_type = f64)]
    pub hcp: Decimal,
    pub hcp_date: NaiveDate,
}

impl From<HcpHistory> for HcpHistoryResponseDto {
    fn from(h: HcpHistory) -> Self {
        Self {
            hcp_history_id: h.hcp_history_id,
            user_id: h.user_id,
            hcp: h.hcp,
            hcp_date: h.hcp_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_reads_camel_case_date() {
        let dto: CreateHcpHistoryDto = serde_json::from_value(json!({
            "userId": 3,
            "hcp": 18.2,
            "hcpDate": "2024-05-01"
        }))
        .unwrap();
        assert_eq!(dto.hcp_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_rejects_hcp_outside_range() {
        let dto = UpdateHcpHistoryDto {
            hcp: Some(Decimal::from(60)),
            hcp_date: None,
        };
        assert!(dto.validate().is_err());
    }
}
