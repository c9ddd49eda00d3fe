mod hole_stats_service;

pub use hole_stats_service::*;
