//! Error types for Library of Stuff

use thiserror::Error;

/// Stable numeric error codes reported alongside shell feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NoSuchUser = 4,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    NotBorrowed = 13,
    NotBorrower = 14,
    BadValue = 18,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Item is not available: {0}")]
    ItemUnavailable(String),

    #[error("Item is not on loan: {0}")]
    ItemNotOnLoan(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Item {item_id} is on loan to {borrower_id}, not {user_id}")]
    NotBorrower {
        item_id: String,
        borrower_id: String,
        user_id: String,
    },

    #[error("Unknown item kind: {0}")]
    UnknownItemKind(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Numeric code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::ItemNotFound(_) => ErrorCode::NoSuchItem,
            AppError::ItemUnavailable(_) => ErrorCode::ItemNotAvailable,
            AppError::ItemNotOnLoan(_) => ErrorCode::NotBorrowed,
            AppError::UserNotFound(_) => ErrorCode::NoSuchUser,
            AppError::NotBorrower { .. } => ErrorCode::NotBorrower,
            AppError::UnknownItemKind(_) | AppError::Validation(_) => ErrorCode::BadValue,
            AppError::Serialization(_) | AppError::Config(_) | AppError::Io(_) => {
                ErrorCode::Failure
            }
        }
    }

    /// Whether the shell can report this error and keep going.
    ///
    /// Everything except configuration and terminal I/O failures is a
    /// local, recoverable outcome of a single command.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Config(_) | AppError::Io(_))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
