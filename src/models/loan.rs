//! Loan (borrow) record attached to an item while it is out

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who holds an item and since when
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub user_id: String,
    pub date: DateTime<Utc>,
}

impl Loan {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            date: Utc::now(),
        }
    }
}
