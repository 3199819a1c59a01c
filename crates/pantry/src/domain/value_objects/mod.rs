//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod attribute_kind;
mod language;
mod provider;

pub use attribute_kind::*;
pub use language::*;
pub use provider::*;
