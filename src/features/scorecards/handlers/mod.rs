mod scorecard_handler;

pub use scorecard_handler::*;
