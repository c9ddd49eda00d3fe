mod scorecard_service;
mod scorecard_stats;

pub use scorecard_service::ScorecardService;
pub use scorecard_stats::compute_stats;
