mod hole_stats;

pub use hole_stats::*;
