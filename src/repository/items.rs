//! Item domain methods on Repository

use super::{key, Repository};
use crate::{
    error::{AppError, AppResult},
    models::{Item, ItemFilter},
};

impl Repository {
    /// List all items in registration order
    pub fn items_list(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// List items matching a filter
    pub fn items_filter(&self, filter: ItemFilter) -> impl Iterator<Item = &Item> {
        self.items.values().filter(move |item| filter.matches(item))
    }

    /// Get item by ID (case-insensitive)
    pub fn items_get_by_id(&self, id: &str) -> AppResult<&Item> {
        self.items
            .get(&key(id))
            .ok_or_else(|| AppError::ItemNotFound(id.to_string()))
    }

    pub(crate) fn items_get_mut(&mut self, id: &str) -> AppResult<&mut Item> {
        self.items
            .get_mut(&key(id))
            .ok_or_else(|| AppError::ItemNotFound(id.to_string()))
    }

    /// Register a new item; ids must be unique
    pub fn items_create(&mut self, item: Item) -> AppResult<()> {
        let k = key(item.id());
        if k.is_empty() {
            return Err(AppError::Validation("Item id is required".to_string()));
        }
        if item.name().trim().is_empty() {
            return Err(AppError::Validation(format!("Item {} has a blank name", item.id())));
        }
        if self.items.contains_key(&k) {
            return Err(AppError::Validation(format!("Duplicate item id {}", item.id())));
        }
        self.items.insert(k, item);
        Ok(())
    }

    pub fn items_count(&self) -> usize {
        self.items.len()
    }
}
