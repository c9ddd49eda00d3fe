mod type_of_shot_service;

pub use type_of_shot_service::*;
