//! Item Application Service (Use Case)
//!
//! Orchestrates Item CRUD, attribute assignment and the shopping list.

use std::sync::Arc;

use pantry::domain::{validate_item_name, validate_quantity};
use pantry::{AttributeKind, DomainError, Item, ItemRepository, NewItem, ShoppingList};

use super::AttributeService;

/// Fields for creating an Item; tags and locations are given by name
#[derive(Debug, Clone, Default)]
pub struct ItemInput {
    pub name: String,
    pub desired_quantity: i32,
    pub current_quantity: i32,
    pub tags: Vec<String>,
    pub locations: Vec<String>,
}

/// Partial change to an Item
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub desired_quantity: Option<i32>,
    pub current_quantity: Option<i32>,
    pub tags: Option<Vec<String>>,
    pub locations: Option<Vec<String>>,
}

/// Application service for Item operations
pub struct ItemService {
    repo: Arc<dyn ItemRepository>,
    attributes: Arc<AttributeService>,
}

impl ItemService {
    pub fn new(repo: Arc<dyn ItemRepository>, attributes: Arc<AttributeService>) -> Self {
        Self { repo, attributes }
    }

    /// All Items ordered by name
    pub async fn list(&self) -> Result<Vec<Item>, DomainError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Item, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Item", id))
    }

    /// Create an Item, or update the quantities of the one with that name
    pub async fn create(&self, input: ItemInput) -> Result<Item, DomainError> {
        let new_item = NewItem::new(&input.name, input.desired_quantity, input.current_quantity)?;

        let item = match self.repo.find_by_name(&new_item.name).await? {
            Some(existing) => {
                tracing::info!("Item {} already exists, updating quantities", existing.name);
                self.repo
                    .update(&Item {
                        desired_quantity: new_item.desired_quantity,
                        current_quantity: new_item.current_quantity,
                        ..existing
                    })
                    .await?
            }
            None => {
                let created = self.repo.insert(&new_item).await?;
                tracing::info!(
                    "Created Item: {} ({}) {}/{}",
                    created.name,
                    created.id,
                    created.current_quantity,
                    created.desired_quantity
                );
                created
            }
        };

        // Empty lists keep an existing item's tags and locations
        self.assign_attributes(item.id, Some(input.tags), Some(input.locations))
            .await?;
        self.get(item.id).await
    }

    /// Apply a partial update; attribute lists replace only when non-empty
    pub async fn update(&self, id: i64, patch: ItemPatch) -> Result<Item, DomainError> {
        let current = self.get(id).await?;

        let name = match patch.name {
            Some(name) => validate_item_name(&name)?,
            None => current.name.clone(),
        };
        let desired_quantity = patch.desired_quantity.unwrap_or(current.desired_quantity);
        let current_quantity = patch.current_quantity.unwrap_or(current.current_quantity);
        validate_quantity("desired_quantity", desired_quantity)?;
        validate_quantity("current_quantity", current_quantity)?;

        if let Some(existing) = self.repo.find_by_name(&name).await? {
            if existing.id != id {
                return Err(DomainError::Conflict(format!(
                    "Item '{}' already exists",
                    name
                )));
            }
        }

        self.repo
            .update(&Item {
                name,
                desired_quantity,
                current_quantity,
                ..current
            })
            .await?;

        self.assign_attributes(id, patch.tags, patch.locations)
            .await?;

        tracing::info!("Updated Item: {}", id);
        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted Item: {}", id);
        }
        Ok(deleted)
    }

    /// Everything below its desired quantity
    pub async fn shopping_list(&self) -> Result<ShoppingList, DomainError> {
        let items = self.repo.find_all().await?;
        Ok(ShoppingList::from_items(&items))
    }

    async fn assign_attributes(
        &self,
        item_id: i64,
        tags: Option<Vec<String>>,
        locations: Option<Vec<String>>,
    ) -> Result<(), DomainError> {
        if let Some(ids) = self.resolve_names(AttributeKind::Tag, tags).await? {
            self.repo.set_tags(item_id, &ids).await?;
        }
        if let Some(ids) = self.resolve_names(AttributeKind::Location, locations).await? {
            self.repo.set_locations(item_id, &ids).await?;
        }
        Ok(())
    }

    /// Ids for the given names, creating missing attributes; `None` when
    /// there is nothing to assign
    async fn resolve_names(
        &self,
        kind: AttributeKind,
        names: Option<Vec<String>>,
    ) -> Result<Option<Vec<i64>>, DomainError> {
        let names: Vec<String> = names
            .unwrap_or_default()
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            return Ok(None);
        }

        let mut ids = Vec::with_capacity(names.len());
        for name in &names {
            let attribute = self.attributes.get_or_create(kind, name).await?;
            if !ids.contains(&attribute.id) {
                ids.push(attribute.id);
            }
        }
        Ok(Some(ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::adapters::memory::MemoryStore;
    use crate::application::SettingsService;

    fn service() -> ItemService {
        let store = Arc::new(MemoryStore::new());
        let settings = Arc::new(SettingsService::new(store.clone(), Duration::from_secs(300)));
        let attributes = Arc::new(AttributeService::new(store.clone(), settings));
        ItemService::new(store, attributes)
    }

    fn input(name: &str, desired: i32, current: i32) -> ItemInput {
        ItemInput {
            name: name.to_string(),
            desired_quantity: desired,
            current_quantity: current,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_with_attributes() {
        let service = service();
        let item = service
            .create(ItemInput {
                tags: vec!["Dairy".to_string(), " ".to_string(), "Dairy".to_string()],
                locations: vec!["Fridge".to_string()],
                ..input(" Milk ", 4, 2)
            })
            .await
            .unwrap();

        assert_eq!(item.name, "Milk");
        assert_eq!(item.tags.len(), 1);
        assert_eq!(item.tags[0].emoji, "🥛");
        assert_eq!(item.locations[0].name, "Fridge");
    }

    #[tokio::test]
    async fn test_create_existing_name_updates_quantities() {
        let service = service();
        let first = service.create(input("Eggs", 12, 6)).await.unwrap();
        let second = service.create(input("Eggs", 10, 3)).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.desired_quantity, 10);
        assert_eq!(second.current_quantity, 3);
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_recreate_without_attributes_keeps_them() {
        let service = service();
        service
            .create(ItemInput {
                tags: vec!["Dairy".to_string()],
                locations: vec!["Fridge".to_string()],
                ..input("Milk", 4, 2)
            })
            .await
            .unwrap();

        let again = service.create(input("Milk", 6, 1)).await.unwrap();
        assert_eq!(again.current_quantity, 1);
        assert_eq!(again.tags[0].name, "Dairy");
        assert_eq!(again.locations[0].name, "Fridge");
    }

    #[tokio::test]
    async fn test_negative_quantity_rejected() {
        let service = service();
        let result = service.create(input("Eggs", 12, -1)).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let item = service.create(input("Eggs", 12, 6)).await.unwrap();
        let patched = service
            .update(
                item.id,
                ItemPatch {
                    desired_quantity: Some(-3),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(patched, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_patch_and_rename_conflict() {
        let service = service();
        let eggs = service
            .create(ItemInput {
                tags: vec!["Breakfast".to_string()],
                ..input("Eggs", 12, 6)
            })
            .await
            .unwrap();
        service.create(input("Milk", 2, 1)).await.unwrap();

        let patched = service
            .update(
                eggs.id,
                ItemPatch {
                    current_quantity: Some(8),
                    tags: Some(vec![]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(patched.current_quantity, 8);
        assert_eq!(patched.desired_quantity, 12);
        // empty list leaves tags alone
        assert_eq!(patched.tags.len(), 1);

        let conflict = service
            .update(
                eggs.id,
                ItemPatch {
                    name: Some("Milk".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(conflict, Err(DomainError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_delete_and_missing() {
        let service = service();
        let item = service.create(input("Bread", 1, 1)).await.unwrap();

        assert!(service.delete(item.id).await.unwrap());
        assert!(!service.delete(item.id).await.unwrap());
        assert!(matches!(
            service.get(item.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_shopping_list() {
        let service = service();
        service.create(input("Milk", 4, 1)).await.unwrap();
        service.create(input("Eggs", 12, 12)).await.unwrap();
        service.create(input("Butter", 2, 0)).await.unwrap();

        let list = service.shopping_list().await.unwrap();
        assert_eq!(list.render_text(), "Butter: 2\nMilk: 3");
    }
}
