mod shot_dto;

pub use shot_dto::*;
