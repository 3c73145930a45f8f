//! Configuration management for Library of Stuff

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::env;
use validator::{Validate, ValidationError};

/// Loyalty points awarded per successful borrow unless configured otherwise
pub const DEFAULT_LOYALTY_AWARD: u32 = 10;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Either "pretty" or "json"
    pub format: String,
}

/// Rules applied to borrow and return transactions
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LendingConfig {
    pub loyalty_points_per_borrow: u32,
    /// Reject returns made by anyone other than the current borrower
    pub enforce_borrower_on_return: bool,
}

/// One item of the startup inventory
#[derive(Debug, Deserialize, Validate, Clone)]
pub struct ItemSeed {
    /// Variant tag: tool/workshop, appliance/kitchen, garden
    #[validate(length(min = 1, message = "Item kind is required"))]
    pub kind: String,
    #[validate(length(min = 1, message = "Item id is required"))]
    pub id: String,
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    /// Power source, capacity or material depending on the kind
    pub attribute: String,
    #[serde(default)]
    pub accessories: Vec<String>,
}

/// One registered user
#[derive(Debug, Deserialize, Validate, Clone)]
pub struct UserSeed {
    #[validate(length(min = 1, message = "User id is required"))]
    pub id: String,
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}

/// Rejects names made only of whitespace
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Name must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Inventory and users the catalog starts with
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SeedConfig {
    pub items: Vec<ItemSeed>,
    pub users: Vec<UserSeed>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub lending: LendingConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. STUFF__LENDING__LOYALTY_POINTS_PER_BORROW=5)
            .add_source(
                Environment::with_prefix("STUFF")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override log level from LOG_LEVEL env var if present
            .set_override_option("logging.level", env::var("LOG_LEVEL").ok())?
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a TOML document, on top of the defaults
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for LendingConfig {
    fn default() -> Self {
        Self {
            loyalty_points_per_borrow: DEFAULT_LOYALTY_AWARD,
            enforce_borrower_on_return: false,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            items: vec![
                ItemSeed {
                    kind: "workshop".to_string(),
                    id: "WT001".to_string(),
                    name: "Cordless Drill".to_string(),
                    attribute: "Battery".to_string(),
                    accessories: vec!["Safety Goggles".to_string()],
                },
                ItemSeed {
                    kind: "kitchen".to_string(),
                    id: "KA001".to_string(),
                    name: "High-Speed Blender".to_string(),
                    attribute: "1.5 Litres".to_string(),
                    accessories: Vec::new(),
                },
                ItemSeed {
                    kind: "garden".to_string(),
                    id: "GT001".to_string(),
                    name: "Digging Spade".to_string(),
                    attribute: "Carbon Steel".to_string(),
                    accessories: Vec::new(),
                },
            ],
            users: vec![
                UserSeed {
                    id: "U001".to_string(),
                    name: "Alice Smith".to_string(),
                },
                UserSeed {
                    id: "U002".to_string(),
                    name: "Bob Jones".to_string(),
                },
                UserSeed {
                    id: "U003".to_string(),
                    name: "Charlie Brown".to_string(),
                },
            ],
        }
    }
}
