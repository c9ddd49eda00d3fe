use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct HcpHistory {
    pub hcp_history_id: i64,
    pub user_id: i64,
    pub hcp: Decimal,
    pub hcp_date: NaiveDate,
}
