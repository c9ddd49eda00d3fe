mod hole_handler;

pub use hole_handler::*;
