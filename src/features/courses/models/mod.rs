mod course;

pub use course::*;
