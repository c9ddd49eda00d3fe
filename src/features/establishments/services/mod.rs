mod establishment_service;

pub use establishment_service::*;
