mod establishment_dto;

pub use establishment_dto::*;
