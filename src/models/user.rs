//! User model and related types

use indexmap::IndexSet;
use serde::Serialize;

use crate::config::UserSeed;

/// A registered borrower
#[derive(Debug, Clone, Serialize)]
pub struct User {
    id: String,
    name: String,
    loyalty_points: u32,
    /// Ids of the items currently held, in borrowing order
    held_items: IndexSet<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            loyalty_points: 0,
            held_items: IndexSet::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn loyalty_points(&self) -> u32 {
        self.loyalty_points
    }

    pub fn held_items(&self) -> impl Iterator<Item = &str> {
        self.held_items.iter().map(String::as_str)
    }

    pub fn holds(&self, item_id: &str) -> bool {
        self.held_items.contains(item_id)
    }

    pub fn held_count(&self) -> usize {
        self.held_items.len()
    }

    /// Status line, e.g. `Logged in: Alice Smith | Loyalty Points: 10`
    pub fn summary(&self) -> String {
        format!("Logged in: {} | Loyalty Points: {}", self.name, self.loyalty_points)
    }

    /// Returns false if the item was already held
    pub(crate) fn hold(&mut self, item_id: &str) -> bool {
        self.held_items.insert(item_id.to_string())
    }

    /// Returns false if the item was not held
    pub(crate) fn release(&mut self, item_id: &str) -> bool {
        self.held_items.shift_remove(item_id)
    }

    pub(crate) fn award_points(&mut self, points: u32) {
        self.loyalty_points = self.loyalty_points.saturating_add(points);
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

impl From<&UserSeed> for User {
    fn from(seed: &UserSeed) -> Self {
        User::new(&seed.id, &seed.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new("U001", "Alice Smith");
        assert_eq!(user.loyalty_points(), 0);
        assert_eq!(user.held_count(), 0);
        assert_eq!(user.to_string(), "U001: Alice Smith");
    }

    #[test]
    fn test_held_items_have_no_duplicates() {
        let mut user = User::new("U002", "Bob Jones");
        assert!(user.hold("WT001"));
        assert!(user.hold("GT001"));
        assert!(!user.hold("WT001"));
        assert_eq!(user.held_items().collect::<Vec<_>>(), vec!["WT001", "GT001"]);

        assert!(user.release("WT001"));
        assert!(!user.release("WT001"));
        assert_eq!(user.held_items().collect::<Vec<_>>(), vec!["GT001"]);
    }

    #[test]
    fn test_points_saturate() {
        let mut user = User::new("U003", "Charlie Brown");
        user.award_points(10);
        assert_eq!(user.summary(), "Logged in: Charlie Brown | Loyalty Points: 10");
        user.award_points(u32::MAX);
        assert_eq!(user.loyalty_points(), u32::MAX);
    }
}
