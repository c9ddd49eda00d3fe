mod type_of_shot_handler;

pub use type_of_shot_handler::*;
