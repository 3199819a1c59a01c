//! Domain Services
//!
//! Pure functions over domain types; no I/O.

mod classifier;
mod normalizer;

pub use classifier::*;
pub use normalizer::*;
