mod tee_handler;

pub use tee_handler::*;
