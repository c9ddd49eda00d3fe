mod hole_length;

pub use hole_length::*;
