//! Library of Stuff
//!
//! A community lending inventory: workshop tools, kitchen appliances and
//! garden equipment that registered users borrow and return, earning
//! loyalty points along the way. The [`services::Catalog`] owns every item
//! and user; [`shell::Shell`] drives it from a console.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod shell;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::Catalog;
