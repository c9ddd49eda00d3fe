mod establishment_handler;

pub use establishment_handler::*;
