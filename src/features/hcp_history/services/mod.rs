mod hcp_history_service;

pub use hcp_history_service::*;
