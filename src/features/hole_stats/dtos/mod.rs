mod hole_stats_dto;

pub use hole_stats_dto::*;
