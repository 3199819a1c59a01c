//! Item DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use pantry::{Item, ShoppingList};

use super::AttributeResponse;
use crate::application::{ItemInput, ItemPatch};

/// Create Item request; an existing name updates that Item instead
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub desired_quantity: i32,
    #[serde(default)]
    pub current_quantity: i32,
    /// Tag names; missing tags are created
    #[serde(default)]
    pub tags: Vec<String>,
    /// Location names; missing locations are created
    #[serde(default)]
    pub locations: Vec<String>,
}

impl From<CreateItemRequest> for ItemInput {
    fn from(req: CreateItemRequest) -> Self {
        Self {
            name: req.name,
            desired_quantity: req.desired_quantity,
            current_quantity: req.current_quantity,
            tags: req.tags,
            locations: req.locations,
        }
    }
}

/// Update Item request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub desired_quantity: Option<i32>,
    pub current_quantity: Option<i32>,
    pub tags: Option<Vec<String>>,
    pub locations: Option<Vec<String>>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(req: UpdateItemRequest) -> Self {
        Self {
            name: req.name,
            desired_quantity: req.desired_quantity,
            current_quantity: req.current_quantity,
            tags: req.tags,
            locations: req.locations,
        }
    }
}

/// Item response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub desired_quantity: i32,
    pub current_quantity: i32,
    pub missing_quantity: i32,
    pub tags: Vec<AttributeResponse>,
    pub locations: Vec<AttributeResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            missing_quantity: item.missing_quantity(),
            name: item.name,
            desired_quantity: item.desired_quantity,
            current_quantity: item.current_quantity,
            tags: item.tags.into_iter().map(Into::into).collect(),
            locations: item.locations.into_iter().map(Into::into).collect(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// One shopping list line
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShoppingListLineResponse {
    pub name: String,
    pub missing_quantity: i32,
}

/// Shopping list response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShoppingListResponse {
    pub items: Vec<ShoppingListLineResponse>,
    /// Plain-text rendering, as served by `/shopping-list.txt`
    pub text: String,
}

impl From<ShoppingList> for ShoppingListResponse {
    fn from(list: ShoppingList) -> Self {
        let text = list.render_text();
        Self {
            items: list
                .lines
                .into_iter()
                .map(|line| ShoppingListLineResponse {
                    name: line.name,
                    missing_quantity: line.missing_quantity,
                })
                .collect(),
            text,
        }
    }
}
