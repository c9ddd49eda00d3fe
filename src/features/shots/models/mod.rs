mod shot;

pub use shot::*;
