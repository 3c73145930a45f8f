//! User lookup and active-user selection

use super::Catalog;
use crate::{
    error::{AppError, AppResult},
    models::User,
};

/// Outcome of switching the active user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSelection {
    /// The requested id matched a registered user
    Matched,
    /// No match; the first registered user was selected instead
    Defaulted,
}

impl Catalog {
    /// List all registered users in registration order
    pub fn list_users(&self) -> Vec<&User> {
        self.repository.users_list().collect()
    }

    /// Get user by ID
    pub fn get_user(&self, id: &str) -> AppResult<&User> {
        self.repository.users_get_by_id(id)
    }

    /// The user acting in the current session
    pub fn active_user(&self) -> AppResult<&User> {
        self.repository
            .users_get_by_index(self.active_user)
            .ok_or_else(|| AppError::Validation("Active user is not registered".to_string()))
    }

    /// Switch the active user.
    ///
    /// An unknown id is not an error: the first registered user becomes
    /// active and [`UserSelection::Defaulted`] is returned.
    pub fn set_active_user(&mut self, user_id: &str) -> UserSelection {
        match self.repository.users_position(user_id) {
            Some(index) => {
                self.active_user = index;
                tracing::info!("Active user is now {}", user_id);
                UserSelection::Matched
            }
            None => {
                self.active_user = 0;
                tracing::warn!("User {} not found, defaulting to the first user", user_id);
                UserSelection::Defaulted
            }
        }
    }
}
