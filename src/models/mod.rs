//! Data models for Library of Stuff

pub mod accessory;
pub mod item;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use accessory::Accessory;
pub use item::{Item, ItemDetails, ItemFilter, ItemKind};
pub use loan::Loan;
pub use user::User;

/// Normalize an item or user id for case-insensitive lookup
pub fn normalize_id(id: &str) -> String {
    id.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_id() {
        assert_eq!(normalize_id(" wt001 "), "WT001");
        assert_eq!(normalize_id("été-01"), "ÉTÉ-01");
        assert_eq!(normalize_id("ÉTÉ-01"), normalize_id("été-01"));
    }
}
