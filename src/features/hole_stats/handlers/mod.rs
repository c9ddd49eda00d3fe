mod hole_stats_handler;

pub use hole_stats_handler::*;
