mod hcp_history;

pub use hcp_history::*;
