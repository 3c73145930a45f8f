//! Loan management: borrowing and returning items
//!
//! Both operations check every precondition before touching any record, so
//! a failed call leaves the catalog exactly as it was.

use super::Catalog;
use crate::{
    error::{AppError, AppResult},
    models::Item,
};

impl Catalog {
    /// Borrow an item on behalf of a user.
    ///
    /// The item goes on loan, joins the user's held items and the user earns
    /// the configured loyalty award.
    pub fn borrow_item(&mut self, item_id: &str, user_id: &str) -> AppResult<&Item> {
        let item = self.repository.items_get_by_id(item_id)?;
        let user = self.repository.users_get_by_id(user_id)?;

        if !item.is_available() {
            tracing::warn!(
                "Borrow rejected: item {} is already on loan to {}",
                item.id(),
                item.borrower().unwrap_or("?")
            );
            return Err(AppError::ItemUnavailable(item.id().to_string()));
        }

        let item_id = item.id().to_string();
        let user_id = user.id().to_string();
        let award = self.lending.loyalty_points_per_borrow;

        self.repository.items_get_mut(&item_id)?.lend_to(&user_id)?;
        let user = self.repository.users_get_mut(&user_id)?;
        user.hold(&item_id);
        user.award_points(award);

        tracing::info!(
            "Item {} borrowed by {} (+{} points, total {})",
            item_id,
            user_id,
            award,
            user.loyalty_points()
        );

        self.repository.items_get_by_id(&item_id)
    }

    /// Return an item on behalf of a user.
    ///
    /// When the acting user is not the borrower the return is rejected with
    /// [`AppError::NotBorrower`] if `enforce_borrower_on_return` is set;
    /// otherwise it goes through and the item leaves the actual borrower's
    /// held items.
    pub fn return_item(&mut self, item_id: &str, user_id: &str) -> AppResult<&Item> {
        let item = self.repository.items_get_by_id(item_id)?;
        let user = self.repository.users_get_by_id(user_id)?;

        let Some(borrower_id) = item.borrower() else {
            tracing::warn!("Return rejected: item {} is not on loan", item.id());
            return Err(AppError::ItemNotOnLoan(item.id().to_string()));
        };

        if borrower_id != user.id() {
            if self.lending.enforce_borrower_on_return {
                tracing::warn!(
                    "Return rejected: item {} is on loan to {}, not {}",
                    item.id(),
                    borrower_id,
                    user.id()
                );
                return Err(AppError::NotBorrower {
                    item_id: item.id().to_string(),
                    borrower_id: borrower_id.to_string(),
                    user_id: user.id().to_string(),
                });
            }
            tracing::warn!(
                "Item {} returned by {} on behalf of borrower {}",
                item.id(),
                user.id(),
                borrower_id
            );
        }

        let item_id = item.id().to_string();
        let borrower_id = borrower_id.to_string();

        self.repository.users_get_mut(&borrower_id)?.release(&item_id);
        self.repository.items_get_mut(&item_id)?.take_back()?;

        tracing::info!("Item {} returned (was lent to {})", item_id, borrower_id);

        self.repository.items_get_by_id(&item_id)
    }
}
