mod scorecard_dto;

pub use scorecard_dto::*;
