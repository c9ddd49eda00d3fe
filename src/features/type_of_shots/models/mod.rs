mod type_of_shot;

pub use type_of_shot::*;
