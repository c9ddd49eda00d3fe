mod hole_length_dto;

pub use hole_length_dto::*;
