//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod attribute_repository;
mod item_repository;
mod settings_repository;

pub use attribute_repository::*;
pub use item_repository::*;
pub use settings_repository::*;
