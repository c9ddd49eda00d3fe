mod tee;

pub use tee::*;
