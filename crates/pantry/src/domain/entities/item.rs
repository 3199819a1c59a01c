//! Item - A tracked household good
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Attribute;
use crate::domain::errors::DomainError;

/// Item - desired vs. current quantity of something kept at home
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub desired_quantity: i32,
    pub current_quantity: i32,
    pub tags: Vec<Attribute>,
    pub locations: Vec<Attribute>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Item fields supplied on creation
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub desired_quantity: i32,
    pub current_quantity: i32,
}

impl Item {
    /// How many are needed to reach the desired quantity
    pub fn missing_quantity(&self) -> i32 {
        (self.desired_quantity - self.current_quantity).max(0)
    }

    /// Snapshot row used as prompt context
    pub fn to_entry(&self) -> InventoryEntry {
        InventoryEntry {
            id: self.id,
            name: self.name.clone(),
            current_quantity: self.current_quantity,
        }
    }
}

impl NewItem {
    /// Trim the name and check quantities
    pub fn new(
        name: &str,
        desired_quantity: i32,
        current_quantity: i32,
    ) -> Result<Self, DomainError> {
        let name = validate_item_name(name)?;
        validate_quantity("desired_quantity", desired_quantity)?;
        validate_quantity("current_quantity", current_quantity)?;

        Ok(Self {
            name,
            desired_quantity,
            current_quantity,
        })
    }
}

/// One row of the inventory snapshot sent to the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub id: i64,
    pub name: String,
    pub current_quantity: i32,
}

pub fn validate_item_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation("Item name is required".to_string()));
    }
    if trimmed.chars().count() > 200 {
        return Err(DomainError::Validation(
            "Item name must be at most 200 characters".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

pub fn validate_quantity(field: &str, value: i32) -> Result<(), DomainError> {
    if value < 0 {
        return Err(DomainError::Validation(format!(
            "{} must be a non-negative integer, got {}",
            field, value
        )));
    }
    Ok(())
}
