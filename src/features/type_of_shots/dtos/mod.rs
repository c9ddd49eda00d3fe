mod type_of_shot_dto;

pub use type_of_shot_dto::*;
