//! Tag and Location DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use pantry::Attribute;

use crate::application::{AttributeUpdate, ReclassifyReport};

/// Create Tag/Location request; leave `color` unset to have it classified
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAttributeRequest {
    pub name: String,
    pub color: Option<String>,
    pub emoji: Option<String>,
}

/// Update Tag/Location request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAttributeRequest {
    pub name: Option<String>,
    pub color: Option<String>,
    pub emoji: Option<String>,
}

impl From<UpdateAttributeRequest> for AttributeUpdate {
    fn from(req: UpdateAttributeRequest) -> Self {
        Self {
            name: req.name,
            color: req.color,
            emoji: req.emoji,
        }
    }
}

/// Tag/Location response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AttributeResponse {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub emoji: String,
}

impl From<Attribute> for AttributeResponse {
    fn from(attribute: Attribute) -> Self {
        Self {
            id: attribute.id,
            name: attribute.name,
            color: attribute.color,
            emoji: attribute.emoji,
        }
    }
}

/// Counts of recoloured attributes
#[derive(Debug, Serialize, ToSchema)]
pub struct ReclassifyResponse {
    pub tags: usize,
    pub locations: usize,
}

impl From<ReclassifyReport> for ReclassifyResponse {
    fn from(report: ReclassifyReport) -> Self {
        Self {
            tags: report.tags,
            locations: report.locations,
        }
    }
}
