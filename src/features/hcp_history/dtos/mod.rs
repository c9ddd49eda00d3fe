mod hcp_history_dto;

pub use hcp_history_dto::*;
