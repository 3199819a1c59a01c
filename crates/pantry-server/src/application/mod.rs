//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod attribute_service;
mod consumption_service;
mod item_service;
mod prompt_templates;
mod settings_service;

pub use attribute_service::{AttributeService, AttributeUpdate, ReclassifyReport};
pub use consumption_service::ConsumptionService;
pub use item_service::{ItemInput, ItemPatch, ItemService};
pub use prompt_templates::PromptTemplates;
pub use settings_service::{SettingsService, SettingsUpdate};
