mod user_club_dto;

pub use user_club_dto::*;
