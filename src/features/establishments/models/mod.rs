mod establishment;

pub use establishment::*;
