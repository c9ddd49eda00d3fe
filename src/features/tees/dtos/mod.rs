mod tee_dto;

pub use tee_dto::*;
