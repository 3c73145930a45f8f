//! Catalog read-side queries and integrity checks

use serde::Serialize;

use super::Catalog;
use crate::{
    error::{AppError, AppResult},
    models::{Item, ItemFilter, User},
};

/// Serializable view of the whole catalog
#[derive(Debug, Serialize)]
pub struct CatalogSnapshot<'a> {
    pub active_user: &'a str,
    pub items: Vec<&'a Item>,
    pub users: Vec<&'a User>,
}

impl Catalog {
    /// List every item in registration order
    pub fn list_items(&self) -> Vec<&Item> {
        self.repository.items_list().collect()
    }

    /// List items matching a filter (e.g. available only)
    pub fn filter_items(&self, filter: ItemFilter) -> Vec<&Item> {
        self.repository.items_filter(filter).collect()
    }

    /// Get item by ID
    pub fn get_item(&self, id: &str) -> AppResult<&Item> {
        tracing::debug!("Looking up item {}", id);
        self.repository.items_get_by_id(id)
    }

    /// Items currently held by a user, in borrowing order
    pub fn held_items(&self, user_id: &str) -> AppResult<Vec<&Item>> {
        let user = self.repository.users_get_by_id(user_id)?;
        user.held_items()
            .map(|id| self.repository.items_get_by_id(id))
            .collect()
    }

    pub fn snapshot(&self) -> AppResult<CatalogSnapshot<'_>> {
        Ok(CatalogSnapshot {
            active_user: self.active_user()?.id(),
            items: self.list_items(),
            users: self.list_users(),
        })
    }

    /// Check that loans and held sets agree everywhere.
    ///
    /// Every on-loan item must be held by exactly its borrower, every held
    /// id must name an item lent to that user, and the active user must
    /// exist. The first violation is reported.
    pub fn verify_integrity(&self) -> AppResult<()> {
        for item in self.repository.items_list() {
            match item.borrower() {
                Some(borrower_id) => {
                    let borrower = self.repository.users_get_by_id(borrower_id).map_err(|_| {
                        AppError::Validation(format!(
                            "Item {} is lent to unknown user {}",
                            item.id(),
                            borrower_id
                        ))
                    })?;
                    if !borrower.holds(item.id()) {
                        return Err(AppError::Validation(format!(
                            "Item {} is lent to {} but missing from their held items",
                            item.id(),
                            borrower_id
                        )));
                    }
                }
                None => {
                    if let Some(holder) = self.repository.users_list().find(|u| u.holds(item.id())) {
                        return Err(AppError::Validation(format!(
                            "Item {} is available but held by {}",
                            item.id(),
                            holder.id()
                        )));
                    }
                }
            }
        }

        for user in self.repository.users_list() {
            for held in user.held_items() {
                let item = self.repository.items_get_by_id(held).map_err(|_| {
                    AppError::Validation(format!("User {} holds unknown item {}", user.id(), held))
                })?;
                if item.borrower() != Some(user.id()) {
                    return Err(AppError::Validation(format!(
                        "User {} holds item {} which is not lent to them",
                        user.id(),
                        held
                    )));
                }
            }
        }

        self.active_user()?;
        Ok(())
    }
}
