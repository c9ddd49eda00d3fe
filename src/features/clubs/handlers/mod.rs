mod club_handler;

pub use club_handler::*;
