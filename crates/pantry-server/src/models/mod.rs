//! Pantry API Models
//!
//! Request and response DTOs for the HTTP surface:
//! - Item: inventory records and the shopping list
//! - Attribute: tags and locations
//! - Settings: default colours and emojis
//! - Consumption: suggestions and applied changes

mod attribute;
mod consumption;
mod item;
mod settings;

pub use attribute::*;
pub use consumption::*;
pub use item::*;
pub use settings::*;

use serde::Serialize;
use utoipa::ToSchema;

/// JSON error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
