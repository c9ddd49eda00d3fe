mod hole_length_handler;

pub use hole_length_handler::*;
