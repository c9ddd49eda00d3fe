mod user_club_service;

pub use user_club_service::*;
