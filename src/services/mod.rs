//! Business logic services
//!
//! [`Catalog`] is the single owner of all items and users. It is built once
//! at startup and handed by reference to whichever shell drives it.

pub mod catalog;
pub mod loans;
pub mod users;

pub use catalog::CatalogSnapshot;
pub use users::UserSelection;

use validator::Validate;

use crate::{
    config::{AppConfig, LendingConfig, SeedConfig},
    error::{AppError, AppResult},
    models::{Item, User},
    repository::Repository,
};

/// The lending catalog: inventory, users, lending rules and the active session user
#[derive(Debug, Clone)]
pub struct Catalog {
    repository: Repository,
    lending: LendingConfig,
    /// Registration index of the active user
    active_user: usize,
}

impl Catalog {
    /// Create a catalog over a populated repository.
    ///
    /// At least one user is required since the first registered user is the
    /// initial (and fallback) active user.
    pub fn new(repository: Repository, lending: LendingConfig) -> AppResult<Self> {
        if repository.users_count() == 0 {
            return Err(AppError::Validation(
                "At least one user must be registered".to_string(),
            ));
        }

        let catalog = Self {
            repository,
            lending,
            active_user: 0,
        };
        catalog.verify_integrity()?;
        Ok(catalog)
    }

    /// Build a catalog from seed data
    pub fn from_seed(seed: &SeedConfig, lending: LendingConfig) -> AppResult<Self> {
        let mut repository = Repository::new();

        for item_seed in &seed.items {
            item_seed.validate()?;
            repository.items_create(Item::try_from(item_seed)?)?;
        }
        for user_seed in &seed.users {
            user_seed.validate()?;
            repository.users_create(User::from(user_seed))?;
        }

        tracing::info!(
            "Catalog seeded with {} items and {} users",
            repository.items_count(),
            repository.users_count()
        );

        Self::new(repository, lending)
    }

    /// Build a catalog from the application configuration
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Self::from_seed(&config.seed, config.lending.clone())
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn lending(&self) -> &LendingConfig {
        &self.lending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserSeed;

    #[test]
    fn test_from_default_seed() {
        let catalog = Catalog::from_config(&AppConfig::default()).unwrap();
        assert_eq!(catalog.repository().items_count(), 3);
        assert_eq!(catalog.repository().users_count(), 3);
        assert_eq!(catalog.active_user().unwrap().id(), "U001");
    }

    #[test]
    fn test_requires_a_user() {
        let seed = SeedConfig {
            users: Vec::new(),
            ..SeedConfig::default()
        };
        let result = Catalog::from_seed(&seed, LendingConfig::default());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_rejects_invalid_seed() {
        let mut seed = SeedConfig::default();
        seed.users.push(UserSeed {
            id: "U004".to_string(),
            name: String::new(),
        });
        let result = Catalog::from_seed(&seed, LendingConfig::default());
        assert!(matches!(result, Err(AppError::Validation(_))));

        let mut seed = SeedConfig::default();
        seed.items[1].kind = "hovercraft".to_string();
        let result = Catalog::from_seed(&seed, LendingConfig::default());
        assert!(matches!(result, Err(AppError::UnknownItemKind(_))));
    }

    #[test]
    fn test_rejects_whitespace_names() {
        let mut seed = SeedConfig::default();
        seed.users.push(UserSeed {
            id: "U004".to_string(),
            name: "   ".to_string(),
        });
        let result = Catalog::from_seed(&seed, LendingConfig::default());
        assert!(matches!(result, Err(AppError::Validation(_))));

        let mut seed = SeedConfig::default();
        seed.items[0].name = "\t".to_string();
        let result = Catalog::from_seed(&seed, LendingConfig::default());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_rejects_duplicate_user() {
        let mut seed = SeedConfig::default();
        seed.users.push(UserSeed {
            id: "u001".to_string(),
            name: "Alice Again".to_string(),
        });
        let result = Catalog::from_seed(&seed, LendingConfig::default());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
