mod shot_service;

pub use shot_service::*;
