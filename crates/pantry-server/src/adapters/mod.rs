//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod completion;
#[cfg(test)]
pub mod memory;
pub mod postgres;

// Re-exports
pub use completion::ProviderRouter;
pub use postgres::{PgAttributeRepository, PgItemRepository, PgSettingsRepository};
