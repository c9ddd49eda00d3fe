mod hole_dto;

pub use hole_dto::*;
