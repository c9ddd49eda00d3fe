mod user_club_handler;

pub use user_club_handler::*;
