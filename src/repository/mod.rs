//! Repository layer: in-memory storage of items and users
//!
//! Records are keyed by their normalized id (see [`normalize_id`]) and kept
//! in registration order.

pub mod items;
pub mod users;

use indexmap::IndexMap;

use crate::models::{normalize_id, Item, User};

/// Main repository struct holding every item and user
#[derive(Debug, Clone, Default)]
pub struct Repository {
    items: IndexMap<String, Item>,
    users: IndexMap<String, User>,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

fn key(id: &str) -> String {
    normalize_id(id)
}
