//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Item: tracked good with desired vs. current quantity
//! - Attribute: tag or location with colour and emoji
//! - UserSettings: default colour/emoji per attribute kind
//! - Consumption: candidates, suggestions and applied changes
//! - ShoppingList: what is missing

mod attribute;
mod consumption;
mod item;
mod settings;
mod shopping_list;

pub use attribute::*;
pub use consumption::*;
pub use item::*;
pub use settings::*;
pub use shopping_list::*;
