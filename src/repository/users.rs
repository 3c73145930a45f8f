//! User domain methods on Repository

use super::{key, Repository};
use crate::{
    error::{AppError, AppResult},
    models::User,
};

impl Repository {
    /// List all users in registration order
    pub fn users_list(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Get user by ID (case-insensitive)
    pub fn users_get_by_id(&self, id: &str) -> AppResult<&User> {
        self.users
            .get(&key(id))
            .ok_or_else(|| AppError::UserNotFound(id.to_string()))
    }

    pub(crate) fn users_get_mut(&mut self, id: &str) -> AppResult<&mut User> {
        self.users
            .get_mut(&key(id))
            .ok_or_else(|| AppError::UserNotFound(id.to_string()))
    }

    /// Registration index of a user, used as the active-user pointer
    pub fn users_position(&self, id: &str) -> Option<usize> {
        self.users.get_index_of(&key(id))
    }

    pub fn users_get_by_index(&self, index: usize) -> Option<&User> {
        self.users.get_index(index).map(|(_, user)| user)
    }

    /// Register a new user; ids must be unique
    pub fn users_create(&mut self, user: User) -> AppResult<()> {
        let k = key(user.id());
        if k.is_empty() {
            return Err(AppError::Validation("User id is required".to_string()));
        }
        if user.name().trim().is_empty() {
            return Err(AppError::Validation(format!("User {} has a blank name", user.id())));
        }
        if self.users.contains_key(&k) {
            return Err(AppError::Validation(format!("Duplicate user id {}", user.id())));
        }
        self.users.insert(k, user);
        Ok(())
    }

    pub fn users_count(&self) -> usize {
        self.users.len()
    }
}
