mod hcp_history_handler;

pub use hcp_history_handler::*;
