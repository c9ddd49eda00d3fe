mod user_club;

pub use user_club::*;
