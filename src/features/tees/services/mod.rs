mod tee_service;

pub use tee_service::TeeService;
