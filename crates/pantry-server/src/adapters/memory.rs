//! In-memory implementations of the repository ports, for tests

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use pantry::{
    Attribute, AttributeKind, AttributeRepository, DomainError, Item, ItemRepository,
    NewAttribute, NewItem, SettingsRepository, UserSettings,
};

struct StoredItem {
    id: i64,
    name: String,
    desired_quantity: i32,
    current_quantity: i32,
    tag_ids: Vec<i64>,
    location_ids: Vec<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Default)]
struct State {
    next_id: i64,
    items: BTreeMap<i64, StoredItem>,
    attributes: BTreeMap<i64, Attribute>,
    settings: Option<UserSettings>,
}

impl State {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn hydrate(&self, stored: &StoredItem) -> Item {
        let resolve = |ids: &[i64]| -> Vec<Attribute> {
            let mut attrs: Vec<Attribute> = ids
                .iter()
                .filter_map(|id| self.attributes.get(id).cloned())
                .collect();
            attrs.sort_by(|a, b| a.name.cmp(&b.name));
            attrs
        };

        Item {
            id: stored.id,
            name: stored.name.clone(),
            desired_quantity: stored.desired_quantity,
            current_quantity: stored.current_quantity,
            tags: resolve(&stored.tag_ids),
            locations: resolve(&stored.location_ids),
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }

    fn name_taken_by_other_item(&self, name: &str, id: Option<i64>) -> bool {
        self.items
            .values()
            .any(|item| item.name == name && Some(item.id) != id)
    }

    fn name_taken_by_other_attribute(&self, kind: AttributeKind, name: &str, id: Option<i64>) -> bool {
        self.attributes
            .values()
            .any(|attr| attr.kind == kind && attr.name == name && Some(attr.id) != id)
    }
}

/// One store backing all three repository ports
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    settings_loads: AtomicUsize,
    fail_quantity_updates: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item directly and return its id
    pub fn seed_item(&self, name: &str, desired_quantity: i32, current_quantity: i32) -> i64 {
        let mut state = self.state.lock().unwrap();
        let id = state.allocate_id();
        let now = Utc::now();
        state.items.insert(
            id,
            StoredItem {
                id,
                name: name.to_string(),
                desired_quantity,
                current_quantity,
                tag_ids: vec![],
                location_ids: vec![],
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    pub fn current_quantity(&self, id: i64) -> Option<i32> {
        let state = self.state.lock().unwrap();
        state.items.get(&id).map(|item| item.current_quantity)
    }

    pub fn settings_loads(&self) -> usize {
        self.settings_loads.load(Ordering::SeqCst)
    }

    /// Make every `update_quantity` call fail with a repository error
    pub fn fail_quantity_updates(&self) {
        self.fail_quantity_updates.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ItemRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Item>, DomainError> {
        let state = self.state.lock().unwrap();
        let mut items: Vec<Item> = state.items.values().map(|s| state.hydrate(s)).collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, DomainError> {
        let state = self.state.lock().unwrap();
        Ok(state.items.get(&id).map(|s| state.hydrate(s)))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Item>, DomainError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .items
            .values()
            .find(|s| s.name == name)
            .map(|s| state.hydrate(s)))
    }

    async fn insert(&self, item: &NewItem) -> Result<Item, DomainError> {
        let mut state = self.state.lock().unwrap();
        if state.name_taken_by_other_item(&item.name, None) {
            return Err(DomainError::Conflict(format!(
                "Item '{}' already exists",
                item.name
            )));
        }

        let id = state.allocate_id();
        let now = Utc::now();
        let stored = StoredItem {
            id,
            name: item.name.clone(),
            desired_quantity: item.desired_quantity,
            current_quantity: item.current_quantity,
            tag_ids: vec![],
            location_ids: vec![],
            created_at: now,
            updated_at: now,
        };
        let hydrated = state.hydrate(&stored);
        state.items.insert(id, stored);
        Ok(hydrated)
    }

    async fn update(&self, item: &Item) -> Result<Item, DomainError> {
        let mut state = self.state.lock().unwrap();
        if state.name_taken_by_other_item(&item.name, Some(item.id)) {
            return Err(DomainError::Conflict(format!(
                "Item '{}' already exists",
                item.name
            )));
        }

        let stored = state
            .items
            .get_mut(&item.id)
            .ok_or_else(|| DomainError::not_found("Item", item.id))?;
        stored.name = item.name.clone();
        stored.desired_quantity = item.desired_quantity;
        stored.current_quantity = item.current_quantity;
        stored.updated_at = Utc::now();

        let stored = &state.items[&item.id];
        Ok(state.hydrate(stored))
    }

    async fn update_quantity(&self, id: i64, new_quantity: i32) -> Result<bool, DomainError> {
        if self.fail_quantity_updates.load(Ordering::SeqCst) {
            return Err(DomainError::Repository("store unavailable".to_string()));
        }

        let mut state = self.state.lock().unwrap();
        match state.items.get_mut(&id) {
            Some(stored) => {
                stored.current_quantity = new_quantity;
                stored.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut state = self.state.lock().unwrap();
        Ok(state.items.remove(&id).is_some())
    }

    async fn set_tags(&self, item_id: i64, tag_ids: &[i64]) -> Result<(), DomainError> {
        let mut state = self.state.lock().unwrap();
        let stored = state
            .items
            .get_mut(&item_id)
            .ok_or_else(|| DomainError::not_found("Item", item_id))?;
        stored.tag_ids = tag_ids.to_vec();
        Ok(())
    }

    async fn set_locations(&self, item_id: i64, location_ids: &[i64]) -> Result<(), DomainError> {
        let mut state = self.state.lock().unwrap();
        let stored = state
            .items
            .get_mut(&item_id)
            .ok_or_else(|| DomainError::not_found("Item", item_id))?;
        stored.location_ids = location_ids.to_vec();
        Ok(())
    }
}

#[async_trait]
impl AttributeRepository for MemoryStore {
    async fn find_all(&self, kind: AttributeKind) -> Result<Vec<Attribute>, DomainError> {
        let state = self.state.lock().unwrap();
        let mut attrs: Vec<Attribute> = state
            .attributes
            .values()
            .filter(|a| a.kind == kind)
            .cloned()
            .collect();
        attrs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(attrs)
    }

    async fn find_by_id(
        &self,
        kind: AttributeKind,
        id: i64,
    ) -> Result<Option<Attribute>, DomainError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .attributes
            .get(&id)
            .filter(|a| a.kind == kind)
            .cloned())
    }

    async fn find_by_name(
        &self,
        kind: AttributeKind,
        name: &str,
    ) -> Result<Option<Attribute>, DomainError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .attributes
            .values()
            .find(|a| a.kind == kind && a.name == name)
            .cloned())
    }

    async fn insert(&self, attribute: &NewAttribute) -> Result<Attribute, DomainError> {
        let mut state = self.state.lock().unwrap();
        if state.name_taken_by_other_attribute(attribute.kind, &attribute.name, None) {
            return Err(DomainError::Conflict(format!(
                "{} '{}' already exists",
                attribute.kind.label(),
                attribute.name
            )));
        }

        let id = state.allocate_id();
        let created = Attribute {
            id,
            kind: attribute.kind,
            name: attribute.name.clone(),
            color: attribute.color.clone(),
            emoji: attribute.emoji.clone(),
        };
        state.attributes.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, attribute: &Attribute) -> Result<Attribute, DomainError> {
        let mut state = self.state.lock().unwrap();
        if state.name_taken_by_other_attribute(attribute.kind, &attribute.name, Some(attribute.id)) {
            return Err(DomainError::Conflict(format!(
                "{} '{}' already exists",
                attribute.kind.label(),
                attribute.name
            )));
        }

        match state.attributes.get_mut(&attribute.id) {
            Some(stored) if stored.kind == attribute.kind => {
                *stored = attribute.clone();
                Ok(attribute.clone())
            }
            _ => Err(DomainError::not_found(attribute.kind.label(), attribute.id)),
        }
    }

    async fn delete(&self, kind: AttributeKind, id: i64) -> Result<bool, DomainError> {
        let mut state = self.state.lock().unwrap();
        let exists = state.attributes.get(&id).is_some_and(|a| a.kind == kind);
        if !exists {
            return Ok(false);
        }

        state.attributes.remove(&id);
        for item in state.items.values_mut() {
            item.tag_ids.retain(|t| *t != id);
            item.location_ids.retain(|l| *l != id);
        }
        Ok(true)
    }
}

#[async_trait]
impl SettingsRepository for MemoryStore {
    async fn load(&self) -> Result<Option<UserSettings>, DomainError> {
        self.settings_loads.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        Ok(state.settings.clone())
    }

    async fn save(&self, settings: &UserSettings) -> Result<UserSettings, DomainError> {
        let mut state = self.state.lock().unwrap();
        let saved = UserSettings {
            updated_at: Utc::now(),
            ..settings.clone()
        };
        state.settings = Some(saved.clone());
        Ok(saved)
    }
}
