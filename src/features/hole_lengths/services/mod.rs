mod hole_length_service;

pub use hole_length_service::HoleLengthService;
