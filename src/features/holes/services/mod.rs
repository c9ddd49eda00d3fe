mod hole_service;

pub use hole_service::HoleService;
