mod shot_handler;

pub use shot_handler::*;
