//! PostgreSQL Repository Implementations

mod attribute_repository;
mod item_repository;
mod settings_repository;

pub use attribute_repository::PgAttributeRepository;
pub use item_repository::PgItemRepository;
pub use settings_repository::PgSettingsRepository;
