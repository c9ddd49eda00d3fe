mod hole;

pub use hole::*;
