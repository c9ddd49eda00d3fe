mod club_service;

pub use club_service::*;
