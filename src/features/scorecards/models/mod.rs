mod scorecard;

pub use scorecard::*;
