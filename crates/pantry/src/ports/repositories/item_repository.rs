//! Item Repository Port
//!
//! Abstract interface for Item persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Item, NewItem};

/// Repository interface for Item entities
///
/// Items are returned with their tags and locations loaded.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find all Items, ordered by name
    async fn find_all(&self) -> Result<Vec<Item>, DomainError>;

    /// Find an Item by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, DomainError>;

    /// Find an Item by its unique name
    async fn find_by_name(&self, name: &str) -> Result<Option<Item>, DomainError>;

    /// Insert a new Item
    async fn insert(&self, item: &NewItem) -> Result<Item, DomainError>;

    /// Update name and quantities of an existing Item
    async fn update(&self, item: &Item) -> Result<Item, DomainError>;

    /// Set the current quantity; `false` when the Item does not exist
    async fn update_quantity(&self, id: i64, new_quantity: i32) -> Result<bool, DomainError>;

    /// Delete an Item by ID
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// Replace the Item's tags
    async fn set_tags(&self, item_id: i64, tag_ids: &[i64]) -> Result<(), DomainError>;

    /// Replace the Item's locations
    async fn set_locations(&self, item_id: i64, location_ids: &[i64]) -> Result<(), DomainError>;
}
